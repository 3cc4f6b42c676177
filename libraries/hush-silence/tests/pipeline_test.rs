//! Edge trimming and preprocessing pipeline tests
//!
//! Covers:
//! - Leading/trailing silence measurement on composed tone/silence signals
//! - Edge removal, including fully silent input
//! - The clip-short length policy (residue dropping, soft/hard limit cuts)
//! - Decoding WAV bytes straight into the pipeline

use hush_audio::test_utils::{compose, encode_mono_wav, sine, Segment, WavEncoding};
use hush_audio::SymphoniaDecoder;
use hush_core::{AudioDecoder, SampleBuffer, SampleRate};
use hush_silence::{
    leading_silence_length, preprocess, preprocess_bytes, remove_silence_edges,
    trailing_silence_length, EdgeConfig, PreprocessConfig, SilenceError,
};

const RATE: u32 = 16_000;

// ============================================================================
// EDGE TRIMMER
// ============================================================================

#[test]
fn leading_silence_before_a_tone() {
    let audio = compose(RATE, &[Segment::silence(250), Segment::tone(500)]);
    assert_eq!(leading_silence_length(&audio, &EdgeConfig::leading()).unwrap(), 250);
}

#[test]
fn trailing_silence_after_a_tone() {
    let audio = compose(RATE, &[Segment::tone(500), Segment::silence(370)]);
    assert_eq!(trailing_silence_length(&audio, &EdgeConfig::default()).unwrap(), 370);
    assert_eq!(leading_silence_length(&audio, &EdgeConfig::default()).unwrap(), 0);
}

#[test]
fn leading_silence_of_empty_buffer_is_zero() {
    let empty = SampleBuffer::empty(SampleRate::new(RATE));
    assert_eq!(leading_silence_length(&empty, &EdgeConfig::leading()).unwrap(), 0);
}

#[test]
fn quiet_tone_counts_as_silence_below_threshold() {
    // 0.001 peak is about -63 dBFS RMS
    let audio = compose(
        RATE,
        &[
            Segment::Tone {
                duration_ms: 400,
                amplitude: 0.001,
            },
            Segment::tone(400),
        ],
    );
    assert_eq!(leading_silence_length(&audio, &EdgeConfig::leading()).unwrap(), 400);
    assert_eq!(
        leading_silence_length(&audio, &EdgeConfig::new(-80.0, 10)).unwrap(),
        0
    );
}

#[test]
fn edges_are_cropped_to_the_tone() {
    let audio = compose(
        RATE,
        &[Segment::silence(300), Segment::tone(1_000), Segment::silence(450)],
    );
    let trimmed = remove_silence_edges(&audio, &EdgeConfig::default()).unwrap();

    assert_eq!(trimmed.len(), 16_000);
    assert_eq!(trimmed.samples(), &audio.samples()[4_800..20_800]);
}

#[test]
fn silent_audio_trims_to_empty() {
    let audio = compose(RATE, &[Segment::silence(2_000)]);
    assert!(remove_silence_edges(&audio, &EdgeConfig::default()).unwrap().is_empty());
}

#[test]
fn zero_rate_audio_is_rejected() {
    let audio = SampleBuffer::new(vec![0.5; 100], SampleRate::new(0));
    let result = remove_silence_edges(&audio, &EdgeConfig::default());
    assert!(matches!(result, Err(SilenceError::InvalidConfiguration(_))));
}

// ============================================================================
// PREPROCESSING
// ============================================================================

#[test]
fn preprocess_without_clipping_matches_edge_removal() {
    let audio = compose(
        RATE,
        &[Segment::silence(120), Segment::tone(3), Segment::silence(120)],
    );
    let config = PreprocessConfig::new(EdgeConfig::default(), false);

    let out = preprocess(&audio, &config).unwrap();
    assert_eq!(out, remove_silence_edges(&audio, &config.edges).unwrap());
}

#[test]
fn long_audio_is_cut_at_the_last_pause_before_the_limit() {
    let audio = compose(
        RATE,
        &[
            Segment::tone(4_000),
            Segment::silence(1_500),
            Segment::tone(4_000),
            Segment::silence(1_500),
            Segment::tone(4_000),
            Segment::silence(1_500),
            Segment::tone(2_000),
        ],
    );

    let out = preprocess(&audio, &PreprocessConfig::default()).unwrap();

    assert_eq!(out.duration_ms(), 9_500);
    assert_eq!(out.samples(), &audio.samples()[..152_000]);
}

#[test]
fn short_pause_is_found_by_the_fine_pass() {
    let audio = compose(
        RATE,
        &[Segment::tone(8_000), Segment::silence(500), Segment::tone(8_000)],
    );

    let out = preprocess(&audio, &PreprocessConfig::default()).unwrap();

    assert_eq!(out.duration_ms(), 8_000);
}

#[test]
fn unbroken_audio_is_cut_at_hard_limit() {
    let audio = compose(RATE, &[Segment::silence(200), Segment::tone(15_000)]);

    let out = preprocess(&audio, &PreprocessConfig::default()).unwrap();

    assert_eq!(out.len(), 192_000);
    assert_eq!(out.samples(), &audio.samples()[3_200..195_200]);
}

#[test]
fn preprocess_never_grows_the_input() {
    for segments in [
        vec![Segment::tone(20)],
        vec![Segment::silence(50), Segment::tone(7), Segment::silence(50)],
        vec![Segment::tone(12_500)],
    ] {
        let audio = compose(RATE, &segments);
        let out = preprocess(&audio, &PreprocessConfig::default()).unwrap();
        assert!(out.len() <= audio.len());
    }
}

// ============================================================================
// BYTES IN
// ============================================================================

#[test]
fn wav_bytes_are_decoded_and_trimmed() {
    let audio = compose(
        RATE,
        &[Segment::silence(300), Segment::tone(1_000), Segment::silence(300)],
    );
    let bytes = encode_mono_wav(audio.samples(), RATE, WavEncoding::Int16).unwrap();

    let out = preprocess_bytes(&SymphoniaDecoder::new(), &bytes, &PreprocessConfig::default())
        .unwrap();

    assert_eq!(out.sample_rate().as_hz(), RATE);
    assert_eq!(out.len(), 16_000);
    let reference = sine(440.0, RATE, 1_000, 0.5);
    for (decoded, expected) in out.samples().iter().zip(&reference) {
        assert!((decoded - expected).abs() < 1e-4);
    }
}

#[test]
fn boxed_decoder_is_accepted() {
    let decoder: Box<dyn AudioDecoder> = Box::new(SymphoniaDecoder::new());
    let bytes = encode_mono_wav(&sine(440.0, RATE, 500, 0.5), RATE, WavEncoding::Float32).unwrap();

    let out = preprocess_bytes(decoder.as_ref(), &bytes, &PreprocessConfig::default()).unwrap();

    assert_eq!(out.len(), 8_000);
}

#[test]
fn undecodable_bytes_surface_as_decode_error() {
    let result = preprocess_bytes(
        &SymphoniaDecoder::new(),
        b"not a wav file at all",
        &PreprocessConfig::default(),
    );
    assert!(matches!(result, Err(SilenceError::Decode(_))));
}
