/// Layered CLI configuration
use hush_silence::{
    ClipPolicy, DetectionConfig, EdgeConfig, KeepSilence, PreprocessConfig, SplitConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; nested keys use `__`
/// (`HUSH_DETECTION__SILENCE_THRESH_DB=-30`)
pub const ENV_PREFIX: &str = "HUSH";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HushConfig {
    /// Used by `detect-silence`, `detect-nonsilent` and `split`
    pub detection: DetectionConfig,

    pub keep_silence: KeepSilence,

    /// Used by `leading-silence`
    pub leading: EdgeConfig,

    /// Used by `trim` and `preprocess`
    pub edges: EdgeConfig,

    pub clip_short: bool,

    pub clip: ClipPolicy,
}

impl Default for HushConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            keep_silence: KeepSilence::default(),
            leading: EdgeConfig::leading(),
            edges: EdgeConfig::default(),
            clip_short: true,
            clip: ClipPolicy::default(),
        }
    }
}

impl HushConfig {
    /// Load defaults, then the optional TOML file, then `HUSH_` environment variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            settings = settings.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn split(&self) -> SplitConfig {
        SplitConfig::new(self.detection, self.keep_silence)
    }

    pub fn preprocess(&self) -> PreprocessConfig {
        PreprocessConfig {
            edges: self.edges,
            clip_short: self.clip_short,
            clip: self.clip,
        }
    }
}
