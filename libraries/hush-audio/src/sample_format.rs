//! PCM sample formats and their normalization to `[-1.0, 1.0]`
//!
//! Integer samples are divided by their format's full-scale magnitude
//! (2^(N-1)), so the most negative code maps to exactly -1.0. Float samples
//! are already normalized and pass through unchanged.

use std::fmt;
use symphonia::core::audio::AudioBufferRef;
use symphonia::core::sample::{i24, Sample};

/// Sample encodings the decoder knows how to normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcmFormat {
    /// 8-bit integer (unsigned in WAV, signed in AIFF)
    Pcm8,
    /// 16-bit signed integer
    Pcm16,
    /// 24-bit signed integer
    Pcm24,
    /// 32-bit signed integer
    Pcm32Int,
    /// 32-bit IEEE float
    Pcm32Float,
    /// 64-bit IEEE float
    Pcm64Float,
}

impl PcmFormat {
    /// Divisor that maps integer codes into `[-1.0, 1.0]`; `None` for float formats
    pub fn full_scale(self) -> Option<f64> {
        match self {
            Self::Pcm8 => Some(128.0),
            Self::Pcm16 => Some(32_768.0),
            Self::Pcm24 => Some(8_388_608.0),
            Self::Pcm32Int => Some(2_147_483_648.0),
            Self::Pcm32Float | Self::Pcm64Float => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Pcm8 => 8,
            Self::Pcm16 => 16,
            Self::Pcm24 => 24,
            Self::Pcm32Int | Self::Pcm32Float => 32,
            Self::Pcm64Float => 64,
        }
    }

    pub fn is_float(self) -> bool {
        self.full_scale().is_none()
    }

    /// Format of a decoded Symphonia buffer, if it is one we can normalize
    ///
    /// Unsigned 16/24/32-bit buffers are not supported.
    pub fn of(buffer: &AudioBufferRef<'_>) -> Option<Self> {
        match buffer {
            AudioBufferRef::U8(_) | AudioBufferRef::S8(_) => Some(Self::Pcm8),
            AudioBufferRef::S16(_) => Some(Self::Pcm16),
            AudioBufferRef::S24(_) => Some(Self::Pcm24),
            AudioBufferRef::S32(_) => Some(Self::Pcm32Int),
            AudioBufferRef::F32(_) => Some(Self::Pcm32Float),
            AudioBufferRef::F64(_) => Some(Self::Pcm64Float),
            AudioBufferRef::U16(_) | AudioBufferRef::U24(_) | AudioBufferRef::U32(_) => None,
        }
    }
}

impl fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_float() { "float" } else { "int" };
        write!(f, "{}-bit {}", self.bits(), kind)
    }
}

/// A Symphonia sample type with a fixed normalization rule
pub trait PcmSample: Sample + Copy {
    const PCM_FORMAT: PcmFormat;

    /// Map this sample into `[-1.0, 1.0]`
    fn to_unit(self) -> f32;
}

fn scale(code: f64, format: PcmFormat) -> f32 {
    match format.full_scale() {
        Some(full_scale) => (code / full_scale) as f32,
        None => code as f32,
    }
}

impl PcmSample for u8 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm8;

    fn to_unit(self) -> f32 {
        // 128 is the zero line for unsigned 8-bit
        scale(f64::from(self) - 128.0, Self::PCM_FORMAT)
    }
}

impl PcmSample for i8 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm8;

    fn to_unit(self) -> f32 {
        scale(f64::from(self), Self::PCM_FORMAT)
    }
}

impl PcmSample for i16 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm16;

    fn to_unit(self) -> f32 {
        scale(f64::from(self), Self::PCM_FORMAT)
    }
}

impl PcmSample for i24 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm24;

    fn to_unit(self) -> f32 {
        scale(f64::from(self.inner()), Self::PCM_FORMAT)
    }
}

impl PcmSample for i32 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm32Int;

    fn to_unit(self) -> f32 {
        scale(f64::from(self), Self::PCM_FORMAT)
    }
}

impl PcmSample for f32 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm32Float;

    fn to_unit(self) -> f32 {
        self
    }
}

impl PcmSample for f64 {
    const PCM_FORMAT: PcmFormat = PcmFormat::Pcm64Float;

    fn to_unit(self) -> f32 {
        self as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_extremes_map_to_unit_range() {
        assert_eq!(i16::MIN.to_unit(), -1.0);
        assert!((i16::MAX.to_unit() - 32_767.0 / 32_768.0).abs() < 1e-7);
        assert_eq!(i32::MIN.to_unit(), -1.0);
        assert_eq!((i32::MAX / 2 + 1).to_unit(), 0.5);
    }

    #[test]
    fn unsigned_eight_bit_is_centered() {
        assert_eq!(128u8.to_unit(), 0.0);
        assert_eq!(0u8.to_unit(), -1.0);
        assert_eq!(64i8.to_unit(), 0.5);
    }

    #[test]
    fn floats_pass_through_unchanged() {
        assert_eq!(0.25f32.to_unit(), 0.25);
        assert_eq!((-0.75f64).to_unit(), -0.75);
        // Out-of-range float input is not clamped
        assert_eq!(1.5f32.to_unit(), 1.5);
    }

    #[test]
    fn sample_types_declare_their_format() {
        assert_eq!(<u8 as PcmSample>::PCM_FORMAT, PcmFormat::Pcm8);
        assert_eq!(<i16 as PcmSample>::PCM_FORMAT, PcmFormat::Pcm16);
        assert_eq!(<i24 as PcmSample>::PCM_FORMAT, PcmFormat::Pcm24);
        assert_eq!(<f32 as PcmSample>::PCM_FORMAT, PcmFormat::Pcm32Float);
    }

    #[test]
    fn format_metadata() {
        assert_eq!(PcmFormat::Pcm24.bits(), 24);
        assert_eq!(PcmFormat::Pcm32Int.full_scale(), Some(2_147_483_648.0));
        assert!(PcmFormat::Pcm32Float.is_float());
        assert_eq!(PcmFormat::Pcm16.to_string(), "16-bit int");
        assert_eq!(PcmFormat::Pcm32Float.to_string(), "32-bit float");
    }
}
