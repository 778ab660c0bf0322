//! Single-tap echo reverb — a delayed, attenuated copy summed onto the dry
//! signal.
//!
//! The echo tail past the input boundary is discarded: output length always
//! equals input length, so the reverb never extends a render.

/// Echo parameters. `decay` is the tap gain, `delay_ms` the tap offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Echo {
    pub decay: f64,
    pub delay_ms: f64,
}

impl Echo {
    /// Create an echo; decay is clamped to [0, 1], delay to ≥ 0 ms.
    pub fn new(decay: f64, delay_ms: f64) -> Self {
        Echo {
            decay: decay.clamp(0.0, 1.0),
            delay_ms: delay_ms.max(0.0),
        }
    }

    /// Tap offset in samples at the given rate.
    pub fn delay_samples(&self, sample_rate: f64) -> usize {
        (self.delay_ms * sample_rate / 1000.0) as usize
    }

    /// Dry signal at offset 0 plus the decayed copy at the tap offset,
    /// truncated back to the input length.
    pub fn process(&self, input: &[f64], sample_rate: f64) -> Vec<f64> {
        let delay = self.delay_samples(sample_rate);

        let mut out = vec![0.0; input.len() + delay];
        for (i, &x) in input.iter().enumerate() {
            out[i] += x;
        }
        for (i, &x) in input.iter().enumerate() {
            out[i + delay] += x * self.decay;
        }
        out.truncate(input.len());
        out
    }
}
