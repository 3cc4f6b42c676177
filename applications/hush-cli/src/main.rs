/// Hush - silence analysis from the command line
use clap::Parser;
use hush_cli::{run, Cli, HushConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the JSON report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = HushConfig::load(cli.config.as_deref())?;

    let report = run(&cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
