/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use crate::sample_format::{PcmFormat, PcmSample};
use hush_core::{AudioDecoder as AudioDecoderTrait, SampleBuffer, SampleRate};
use std::io::Cursor;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{self, CodecType, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, trace};

/// Codecs whose declared frame count is exact, so a short decode means truncation
const EXACT_LENGTH_CODECS: &[CodecType] = &[
    codecs::CODEC_TYPE_PCM_U8,
    codecs::CODEC_TYPE_PCM_S8,
    codecs::CODEC_TYPE_PCM_S16LE,
    codecs::CODEC_TYPE_PCM_S16BE,
    codecs::CODEC_TYPE_PCM_S24LE,
    codecs::CODEC_TYPE_PCM_S24BE,
    codecs::CODEC_TYPE_PCM_S32LE,
    codecs::CODEC_TYPE_PCM_S32BE,
    codecs::CODEC_TYPE_PCM_F32LE,
    codecs::CODEC_TYPE_PCM_F32BE,
    codecs::CODEC_TYPE_PCM_F64LE,
    codecs::CODEC_TYPE_PCM_F64BE,
    codecs::CODEC_TYPE_FLAC,
];

/// Audio decoder using Symphonia
///
/// Decodes a complete in-memory container in one pass. The output is always
/// mono: every frame is the mean of all source channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode an encoded byte stream into a mono sample buffer
    ///
    /// # Errors
    /// Fails if the container is unrecognized, has no audio track or sample
    /// rate, contains a malformed packet, ends before its declared length, or
    /// carries a sample format without a normalization rule.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<SampleBuffer> {
        if bytes.is_empty() {
            return Err(AudioError::UnsupportedFormat("empty input".to_string()));
        }

        // Create media source over an owned copy of the input
        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

        // Probe the media source; there is no file extension to hint with
        let probed = symphonia::default::get_probe()
            .format(
                &Hint::new(),
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::UnsupportedFormat(format!("Failed to probe container: {}", e)))?;

        let mut format = probed.format;

        // Find the default track
        let track = format.default_track().ok_or(AudioError::NoAudioTrack)?;

        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or(AudioError::MissingSampleRate)?;
        let track_id = track.id;
        let expected_frames = track
            .codec_params
            .n_frames
            .filter(|_| EXACT_LENGTH_CODECS.contains(&track.codec_params.codec));

        // Create decoder
        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let capacity = expected_frames
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        let mut samples = Vec::with_capacity(capacity);

        loop {
            // Get the next packet
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!("Error reading packet: {}", e)));
                }
            };

            // Skip packets that are not for the default track
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = decoder
                .decode(&packet)
                .map_err(|e| AudioError::DecodeError(e.to_string()))?;

            append_mono(decoded, &mut samples)?;
        }

        if let Some(expected) = expected_frames {
            let decoded = samples.len() as u64;
            if decoded < expected {
                return Err(AudioError::Truncated { expected, decoded });
            }
        }

        debug!(
            "Decoded {} mono frames at {} Hz",
            samples.len(),
            sample_rate
        );

        Ok(SampleBuffer::new(samples, SampleRate::new(sample_rate)))
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&self, bytes: &[u8]) -> hush_core::Result<SampleBuffer> {
        Ok(self.decode_bytes(bytes)?)
    }
}

/// Normalize one decoded packet and append it to `out` as mono frames
fn append_mono(decoded: AudioBufferRef<'_>, out: &mut Vec<f32>) -> Result<()> {
    if let Some(pcm_format) = PcmFormat::of(&decoded) {
        trace!("Packet of {} frames ({})", decoded.frames(), pcm_format);
    }

    match decoded {
        AudioBufferRef::U8(buf) => downmix_into(&*buf, out),
        AudioBufferRef::S8(buf) => downmix_into(&*buf, out),
        AudioBufferRef::S16(buf) => downmix_into(&*buf, out),
        AudioBufferRef::S24(buf) => downmix_into(&*buf, out),
        AudioBufferRef::S32(buf) => downmix_into(&*buf, out),
        AudioBufferRef::F32(buf) => downmix_into(&*buf, out),
        AudioBufferRef::F64(buf) => downmix_into(&*buf, out),
        AudioBufferRef::U16(_) | AudioBufferRef::U24(_) | AudioBufferRef::U32(_) => Err(
            AudioError::UnsupportedFormat("unsigned 16/24/32-bit samples".to_string()),
        ),
    }
}

/// Average all channels of `buf` into mono frames
fn downmix_into<T: PcmSample>(buf: &AudioBuffer<T>, out: &mut Vec<f32>) -> Result<()> {
    let channels = buf.spec().channels.count();
    let frames = buf.frames();

    match channels {
        0 => Err(AudioError::DecodeError(
            "packet declares zero channels".to_string(),
        )),
        1 => {
            out.extend(buf.chan(0).iter().map(|&s| s.to_unit()));
            Ok(())
        }
        _ => {
            let planes: Vec<&[T]> = (0..channels).map(|ch| buf.chan(ch)).collect();
            let divisor = channels as f32;
            out.reserve(frames);
            for frame in 0..frames {
                let sum: f32 = planes.iter().map(|plane| plane[frame].to_unit()).sum();
                out.push(sum / divisor);
            }
            Ok(())
        }
    }
}
