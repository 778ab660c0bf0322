//! One-pole lowpass — a causal exponential moving average.

/// First-order smoothing filter: y[0] = x[0]; y[i] = α·x[i] + (1−α)·y[i−1].
///
/// Lower α smooths harder. Each track picks its own coefficient, so the
/// filter is constructed per call rather than shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePole {
    alpha: f64,
}

impl OnePole {
    /// α is clamped into (0, 1]; α = 1 passes the input through unchanged.
    pub fn new(alpha: f64) -> Self {
        OnePole {
            alpha: alpha.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth the buffer in place. The first sample is left untouched.
    pub fn process(&self, samples: &mut [f64]) {
        for i in 1..samples.len() {
            samples[i] = self.alpha * samples[i] + (1.0 - self.alpha) * samples[i - 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_alpha_is_identity() {
        let input: Vec<f64> = (0..100).map(|i| ((i * 37) % 19) as f64 - 9.0).collect();
        let mut output = input.clone();
        OnePole::new(1.0).process(&mut output);
        assert_eq!(input, output);
    }

    #[test]
    fn length_and_first_sample_preserved() {
        let mut samples = vec![0.8, -0.5, 0.3, 0.9, -1.0];
        OnePole::new(0.2).process(&mut samples);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], 0.8, "y[0] = x[0]");
    }

    #[test]
    fn step_response_converges_to_dc() {
        let mut samples = vec![1.0; 5000];
        samples[0] = 1.0;
        OnePole::new(0.1).process(&mut samples);
        let tail = *samples.last().unwrap();
        assert!(
            (tail - 1.0).abs() < 1e-9,
            "lowpass should pass DC, got {tail}"
        );
    }

    #[test]
    fn lower_alpha_smooths_harder() {
        // Alternating signal; heavier smoothing leaves less sample-to-sample
        // movement.
        let square: Vec<f64> = (0..200).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        let wiggle = |alpha: f64| {
            let mut buf = square.clone();
            OnePole::new(alpha).process(&mut buf);
            buf.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>()
        };

        assert!(
            wiggle(0.1) < wiggle(0.5),
            "alpha 0.1 should smooth more than 0.5"
        );
    }

    #[test]
    fn alpha_is_clamped_to_valid_range() {
        assert_eq!(OnePole::new(2.0).alpha(), 1.0);
        assert!(OnePole::new(0.0).alpha() > 0.0);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut samples: Vec<f64> = Vec::new();
        OnePole::new(0.25).process(&mut samples);
        assert!(samples.is_empty());
    }
}
