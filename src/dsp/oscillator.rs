//! Oscillator bank — waveform buffer generators on a shared time base.
//!
//! Every shape is evaluated at t = sample_index / sample_rate with the same
//! phase convention, so weighted sums of different shapes at one frequency
//! stay coherent (the melody relies on this for its composite timbre).

use std::f64::consts::TAU;

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

impl Waveform {
    /// Render `length` samples of this waveform at `frequency` Hz.
    ///
    /// Output values lie in [-1, 1].
    pub fn render(&self, frequency: f64, length: usize, sample_rate: f64) -> Vec<f64> {
        (0..length)
            .map(|i| self.sample(frequency * i as f64 / sample_rate))
            .collect()
    }

    /// Amplitude at cycle position `x` (frequency × time).
    fn sample(&self, x: f64) -> f64 {
        match self {
            Waveform::Sine => (TAU * x).sin(),
            // Fractional-phase folding: a period-normalized triangle.
            Waveform::Triangle => 2.0 * (2.0 * (x - (0.5 + x).floor())).abs() - 1.0,
            // Fractional-phase wrap: a period-normalized rising ramp.
            Waveform::Sawtooth => 2.0 * (x - (0.5 + x).floor()),
        }
    }
}

/// Weighted sum of waveforms at one frequency.
pub fn blend(
    weights: &[(Waveform, f64)],
    frequency: f64,
    length: usize,
    sample_rate: f64,
) -> Vec<f64> {
    let mut out = vec![0.0; length];
    for &(waveform, weight) in weights {
        let wave = waveform.render(frequency, length, sample_rate);
        for (acc, s) in out.iter_mut().zip(wave) {
            *acc += weight * s;
        }
    }
    out
}
