//! Master stage — track summing, peak normalization, stereo widening.

/// Guards the peak division on silent buffers.
const PEAK_EPSILON: f64 = 1e-6;

/// Circular offset (in samples) of the stereo cross-feed.
pub const WIDEN_SHIFT: usize = 200;

const DRY_WEIGHT: f64 = 0.9;
const SHIFTED_WEIGHT: f64 = 0.1;

/// Sum equal-length tracks sample-wise into one mono buffer.
pub fn mix_down(tracks: &[Vec<f64>]) -> Vec<f64> {
    let len = tracks.first().map_or(0, Vec::len);
    let mut mix = vec![0.0; len];
    for track in tracks {
        debug_assert_eq!(track.len(), len, "all tracks share one sample count");
        for (acc, &s) in mix.iter_mut().zip(track) {
            *acc += s;
        }
    }
    mix
}

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0, |m, &s| m.max(s.abs()))
}

/// Scale the buffer so its peak magnitude is ≈ 1. Silence stays silence.
pub fn normalize(samples: &mut [f64]) {
    let scale = 1.0 / (peak(samples) + PEAK_EPSILON);
    for s in samples.iter_mut() {
        *s *= scale;
    }
}

/// Derive a stereo pair from a mono mix by cross-feeding time-shifted
/// copies: left leans on the signal `shift` samples ahead, right on the
/// signal `shift` samples behind. Shifts wrap circularly around the buffer.
pub fn widen(mix: &[f64], shift: usize) -> (Vec<f64>, Vec<f64>) {
    let n = mix.len();
    if n == 0 {
        return (Vec::new(), Vec::new());
    }
    let shift = shift % n;

    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for i in 0..n {
        let ahead = mix[(i + shift) % n];
        let behind = mix[(i + n - shift) % n];
        left.push(DRY_WEIGHT * mix[i] + SHIFTED_WEIGHT * ahead);
        right.push(DRY_WEIGHT * mix[i] + SHIFTED_WEIGHT * behind);
    }
    (left, right)
}

/// Re-normalize a stereo pair by its combined peak.
pub fn normalize_joint(left: &mut [f64], right: &mut [f64]) {
    let scale = 1.0 / (peak(left).max(peak(right)) + PEAK_EPSILON);
    for s in left.iter_mut().chain(right.iter_mut()) {
        *s *= scale;
    }
}

/// The full master stage: sum, normalize, widen, joint re-normalize.
pub fn master(tracks: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
    let mut mix = mix_down(tracks);
    normalize(&mut mix);
    let (mut left, mut right) = widen(&mix, WIDEN_SHIFT);
    normalize_joint(&mut left, &mut right);
    (left, right)
}
