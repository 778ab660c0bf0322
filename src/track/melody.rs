//! Melody part — pattern-driven notes over the scale with a blended tone.

use rand_pcg::Pcg32;

use crate::dsp::envelope;
use crate::dsp::filter::OnePole;
use crate::dsp::oscillator::{self, Waveform};
use crate::dsp::reverb::Echo;
use crate::theory;

use super::{accumulate, PostChain, TrackContext, TrackGenerator};

/// Oscillator blend defining the melody timbre.
const TONE_BLEND: [(Waveform, f64); 3] = [
    (Waveform::Sine, 0.4),
    (Waveform::Triangle, 0.3),
    (Waveform::Sawtooth, 0.3),
];

/// Shortest melody note, in samples. Keeps extreme tempo/complexity
/// combinations from degenerating into zero-length notes.
const MIN_NOTE_SAMPLES: usize = 200;

const FILTER_ALPHA: f64 = 0.2;
const ECHO_DECAY: f64 = 0.4;
const ECHO_DELAY_MS: f64 = 120.0;

pub struct MelodyTrack;

/// Scale degree of the `step`-th note of a cycling pattern. The degree wrap
/// is defensive; authored patterns stay in range.
fn pattern_degree(pattern: &[usize], step: usize) -> usize {
    pattern[step % pattern.len()] % theory::SCALE_LEN
}

impl TrackGenerator for MelodyTrack {
    fn render(&self, ctx: &TrackContext, _rng: &mut Pcg32) -> Vec<f64> {
        let mut track = vec![0.0; ctx.total_samples];

        let beat = ctx.beat_length();
        let notes_per_beat = ((1.0 + ctx.params.rhythm_complexity * 3.0) as usize).max(1);
        let note_len = (beat / notes_per_beat).max(MIN_NOTE_SAMPLES);
        let pattern = theory::melody_pattern(ctx.params.melody_pattern_id);
        let gain = 0.4 + 0.4 * ctx.params.mood;

        let mut offset = 0;
        let mut step = 0;
        while offset < ctx.total_samples {
            let frequency = ctx.scale.degree(pattern_degree(pattern, step));
            let len = note_len.min(ctx.total_samples - offset);

            let tone = oscillator::blend(&TONE_BLEND, frequency, len, ctx.sample_rate);
            let env = envelope::adsr(len, ctx.params.mood);
            let note: Vec<f64> = tone
                .iter()
                .zip(&env)
                .map(|(w, e)| w * e * gain)
                .collect();
            accumulate(&mut track, offset, &note);

            offset += len;
            step += 1;
        }

        PostChain {
            lowpass: Some(OnePole::new(FILTER_ALPHA)),
            echo: Some(Echo::new(ECHO_DECAY, ECHO_DELAY_MS)),
        }
        .apply(&mut track, ctx.sample_rate);
        track
    }
}
