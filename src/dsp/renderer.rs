//! WAV renderer — renders parameters to a WAV byte buffer.

use crate::params::{ControlParameters, RenderConfig};

use super::engine::{Engine, RenderResult};

/// Render a parameter set to a WAV file as bytes (16-bit stereo PCM).
pub fn render_wav(config: RenderConfig, params: &ControlParameters, seed: u64) -> Vec<u8> {
    let engine = Engine::new(config);
    let pcm = engine.render_pcm_i16(params, seed);

    encode_wav(&pcm, config.sample_rate, 2)
}

/// Wrap an already-rendered result in a WAV container.
pub fn wav_bytes(result: &RenderResult) -> Vec<u8> {
    encode_wav(&quantize_i16(result), result.sample_rate, 2)
}

/// Quantize a stereo render to interleaved 16-bit PCM:
/// round(sample × 32767), clamped.
pub fn quantize_i16(result: &RenderResult) -> Vec<i16> {
    let mut pcm = Vec::with_capacity(result.left.len() * 2);
    for (&l, &r) in result.left.iter().zip(&result.right) {
        pcm.push((l as f64 * 32767.0).round().clamp(-32768.0, 32767.0) as i16);
        pcm.push((r as f64 * 32767.0).round().clamp(-32768.0, 32767.0) as i16);
    }
    pcm
}

/// Encode interleaved i16 PCM samples to a WAV byte buffer.
fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
