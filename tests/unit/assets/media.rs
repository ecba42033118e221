use super::*;

#[test]
fn pcm_duration_counts_frames_not_samples() {
    let pcm = AudioPcm {
        sample_rate: 4,
        channels: 2,
        interleaved_f32: vec![0.0; 16],
    };
    assert_eq!(pcm.frames(), 8);
    assert!((pcm.duration_secs() - 2.0).abs() < 1e-12);
}

#[test]
fn empty_pcm_has_zero_duration() {
    let pcm = AudioPcm::empty(48_000, 2);
    assert_eq!(pcm.frames(), 0);
    assert_eq!(pcm.duration_secs(), 0.0);
    assert_eq!(AudioPcm::empty(0, 0).duration_secs(), 0.0);
}

#[test]
fn f32le_bytes_decode_in_order() {
    let mut bytes = Vec::new();
    for v in [0.5f32, -0.25, 1.0, 0.0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    let pcm = pcm_from_f32le(&bytes, 8).unwrap();
    assert_eq!(pcm.interleaved_f32, vec![0.5, -0.25, 1.0, 0.0]);
    assert_eq!(pcm.sample_rate, 8);
}

#[test]
fn misaligned_f32le_is_rejected() {
    assert!(pcm_from_f32le(&[0u8; 5], 8).is_err());
}
