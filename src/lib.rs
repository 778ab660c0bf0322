pub mod dsp;
pub mod error;
pub mod params;
pub mod theory;
pub mod track;

pub use crate::dsp::engine::{Engine, RenderResult};
pub use crate::error::SynthError;
pub use crate::params::{ControlParameters, RenderConfig};

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the visionscore-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: validate a raw 7-element parameter vector and return the
/// clamped record, so the app can show what the model output was coerced to.
#[wasm_bindgen]
pub fn validate_params(values: &[f64]) -> Result<JsValue, JsValue> {
    let params =
        ControlParameters::from_vector(values).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a parameter vector to interleaved stereo f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_params_samples(
    values: &[f64],
    sample_rate: u32,
    duration_seconds: f64,
    seed: u64,
) -> Result<Vec<f32>, JsValue> {
    let (params, config) = boundary(values, sample_rate, duration_seconds)?;
    let result = Engine::new(config).render_seeded(&params, seed);

    let mut interleaved = Vec::with_capacity(result.left.len() * 2);
    for (&l, &r) in result.left.iter().zip(&result.right) {
        interleaved.push(l);
        interleaved.push(r);
    }
    Ok(interleaved)
}

/// WASM-exposed: render a parameter vector to a WAV byte array.
#[wasm_bindgen]
pub fn render_params_wav(
    values: &[f64],
    sample_rate: u32,
    duration_seconds: f64,
    seed: u64,
) -> Result<Vec<u8>, JsValue> {
    let (params, config) = boundary(values, sample_rate, duration_seconds)?;
    Ok(dsp::renderer::render_wav(config, &params, seed))
}

/// Validate both halves of the WASM call surface.
fn boundary(
    values: &[f64],
    sample_rate: u32,
    duration_seconds: f64,
) -> Result<(ControlParameters, RenderConfig), JsValue> {
    let params =
        ControlParameters::from_vector(values).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let config = RenderConfig::new(sample_rate, duration_seconds)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok((params, config))
}
