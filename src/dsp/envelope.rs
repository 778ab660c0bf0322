//! ADSR envelope generator — per-note gain curves.
//!
//! Unlike a gate-driven envelope, notes here have a known length up front, so
//! the whole curve is produced as one buffer, multiplied onto the note, and
//! discarded. Linear ramps: attack 0→1, decay 1→sustain, flat sustain,
//! release sustain→0.

/// Fraction of the note spent ramping up.
const ATTACK_FRACTION: f64 = 0.1;
/// Fraction of the note spent falling to the sustain level.
const DECAY_FRACTION: f64 = 0.1;
/// Fraction of the note spent fading out.
const RELEASE_FRACTION: f64 = 0.2;

/// Sustain plateau for a given mood: brighter moods hold louder.
pub fn sustain_level(mood: f64) -> f64 {
    0.7 + 0.2 * mood
}

/// Build the gain curve for a note of `length` samples.
///
/// Segment lengths truncate, so attack + decay + release never exceeds 40%
/// of the note; the sustain length is clamped to zero defensively anyway.
/// `length == 0` yields an empty envelope.
pub fn adsr(length: usize, mood: f64) -> Vec<f64> {
    if length == 0 {
        return Vec::new();
    }

    let attack = (length as f64 * ATTACK_FRACTION) as usize;
    let decay = (length as f64 * DECAY_FRACTION) as usize;
    let release = (length as f64 * RELEASE_FRACTION) as usize;
    let sustain_len = length.saturating_sub(attack + decay + release);
    let sustain = sustain_level(mood);

    let mut env = vec![0.0; length];
    let mut idx = 0;
    write_ramp(&mut env, &mut idx, attack, 0.0, 1.0);
    write_ramp(&mut env, &mut idx, decay, 1.0, sustain);
    for _ in 0..sustain_len {
        env[idx] = sustain;
        idx += 1;
    }
    write_ramp(&mut env, &mut idx, release, sustain, 0.0);
    env
}

/// Write an `n`-point inclusive linear ramp from `from` to `to`, stopping at
/// the buffer end. A single-point ramp holds `from`.
fn write_ramp(env: &mut [f64], idx: &mut usize, n: usize, from: f64, to: f64) {
    for i in 0..n {
        if *idx >= env.len() {
            return;
        }
        let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
        env[*idx] = from + (to - from) * t;
        *idx += 1;
    }
}
