//! In-memory WAV encoding for decoder fixtures

use std::io::Cursor;

/// Sample encodings available for generated WAV fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavEncoding {
    Int16,
    Int24,
    Int32,
    Float32,
}

impl WavEncoding {
    pub fn bits(self) -> u16 {
        match self {
            Self::Int16 => 16,
            Self::Int24 => 24,
            Self::Int32 | Self::Float32 => 32,
        }
    }

    /// Largest positive integer code, `None` for float
    fn max_code(self) -> Option<f64> {
        match self {
            Self::Int16 => Some(f64::from(i16::MAX)),
            Self::Int24 => Some(8_388_607.0),
            Self::Int32 => Some(f64::from(i32::MAX)),
            Self::Float32 => None,
        }
    }

    /// Integer code a unit-range sample is stored as
    pub fn quantize(self, sample: f32) -> i32 {
        let max = self.max_code().unwrap_or(1.0);
        (f64::from(sample.clamp(-1.0, 1.0)) * max).round() as i32
    }

    /// Value the decoder should produce for `sample` after a round trip
    pub fn expected_decode(self, sample: f32) -> f32 {
        match self {
            Self::Int16 => (f64::from(self.quantize(sample)) / 32_768.0) as f32,
            Self::Int24 => (f64::from(self.quantize(sample)) / 8_388_608.0) as f32,
            Self::Int32 => (f64::from(self.quantize(sample)) / 2_147_483_648.0) as f32,
            Self::Float32 => sample,
        }
    }
}

/// Encode interleaved samples as a WAV file in memory
///
/// # Arguments
/// * `interleaved` - Samples in frame order (`[L, R, L, R, ...]` for stereo)
/// * `channels` - Channel count
/// * `sample_rate` - Sample rate in Hz
/// * `encoding` - Stored sample format
pub fn encode_wav(
    interleaved: &[f32],
    channels: u16,
    sample_rate: u32,
    encoding: WavEncoding,
) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: encoding.bits(),
        sample_format: match encoding {
            WavEncoding::Float32 => hound::SampleFormat::Float,
            _ => hound::SampleFormat::Int,
        },
    };

    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec)?;
        for &sample in interleaved {
            match encoding {
                WavEncoding::Int16 => writer.write_sample(encoding.quantize(sample) as i16)?,
                WavEncoding::Int24 | WavEncoding::Int32 => {
                    writer.write_sample(encoding.quantize(sample))?;
                }
                WavEncoding::Float32 => writer.write_sample(sample)?,
            }
        }
        writer.finalize()?;
    }
    Ok(bytes)
}

/// Encode a mono signal as a WAV file in memory
pub fn encode_mono_wav(
    samples: &[f32],
    sample_rate: u32,
    encoding: WavEncoding,
) -> Result<Vec<u8>, hound::Error> {
    encode_wav(samples, 1, sample_rate, encoding)
}

/// Interleave equal-length channel planes
pub fn interleave(planes: &[Vec<f32>]) -> Vec<f32> {
    let frames = planes.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = Vec::with_capacity(frames * planes.len());
    for frame in 0..frames {
        for plane in planes {
            out.push(plane[frame]);
        }
    }
    out
}
