//! Drum voices for the kit percussion palette — kick, snare, hi-hat.
//!
//! Short one-shot hits with exponential decay envelopes. Noise is drawn from
//! the injected render RNG so seeded renders stay reproducible.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use super::filter::OnePole;

/// Kick: a 100 Hz strike whose pitch and amplitude both fall exponentially.
pub fn kick(length: usize, sample_rate: f64) -> Vec<f64> {
    let mut phase = 0.0_f64;
    (0..length)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let freq = 100.0 * (-t * 15.0).exp();
            phase += TAU * freq / sample_rate;
            phase.sin() * (-t * 30.0).exp()
        })
        .collect()
}

/// Snare: a 180 Hz body under broadband noise, fast decay, dulled slightly.
pub fn snare(length: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let mut out: Vec<f64> = (0..length)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let noise: f64 = rng.random_range(-1.0..1.0);
            let tone = (TAU * 180.0 * t).sin();
            (tone * 0.3 + noise * 0.7) * (-t * 40.0).exp()
        })
        .collect();
    OnePole::new(0.2).process(&mut out);
    out
}

/// Hi-hat: filtered noise with a very fast decay.
pub fn hihat(length: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let mut out: Vec<f64> = (0..length)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let noise: f64 = rng.random_range(-1.0..1.0);
            noise * (-t * 100.0).exp() * 0.6
        })
        .collect();
    OnePole::new(0.15).process(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SAMPLE_RATE: f64 = 44100.0;

    #[test]
    fn voices_have_requested_length_and_stay_bounded() {
        let mut rng = Pcg32::seed_from_u64(7);
        for hit in [
            kick(2000, SAMPLE_RATE),
            snare(2000, SAMPLE_RATE, &mut rng),
            hihat(2000, SAMPLE_RATE, &mut rng),
        ] {
            assert_eq!(hit.len(), 2000);
            for &s in &hit {
                assert!(s.abs() <= 1.0 + 1e-9, "drum sample out of range: {s}");
            }
        }
    }

    #[test]
    fn hits_decay_towards_silence() {
        let mut rng = Pcg32::seed_from_u64(7);
        let length = 8820; // 200 ms
        for hit in [
            kick(length, SAMPLE_RATE),
            snare(length, SAMPLE_RATE, &mut rng),
            hihat(length, SAMPLE_RATE, &mut rng),
        ] {
            let head = hit[..length / 4].iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
            let tail = hit[3 * length / 4..]
                .iter()
                .fold(0.0_f64, |m, &s| m.max(s.abs()));
            assert!(head > 0.01, "hit should open audibly, peak {head}");
            assert!(tail < head / 5.0, "hit should die away, head {head} tail {tail}");
        }
    }

    #[test]
    fn noise_voices_are_seed_deterministic() {
        let a = snare(500, SAMPLE_RATE, &mut Pcg32::seed_from_u64(42));
        let b = snare(500, SAMPLE_RATE, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);

        let c = hihat(500, SAMPLE_RATE, &mut Pcg32::seed_from_u64(1));
        let d = hihat(500, SAMPLE_RATE, &mut Pcg32::seed_from_u64(2));
        assert_ne!(c, d, "different seeds should give different noise");
    }
}
