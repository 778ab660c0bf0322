//! Bass part — a sustained root-note pulse one octave below the scale.

use rand_pcg::Pcg32;

use crate::dsp::envelope;
use crate::dsp::filter::OnePole;
use crate::dsp::oscillator::Waveform;

use super::{accumulate, PostChain, TrackContext, TrackGenerator};

const GAIN: f64 = 0.3;
/// Heavier smoothing than the melody — the bass stays deliberately dull.
const FILTER_ALPHA: f64 = 0.1;
/// Bass notes span two beats regardless of rhythm complexity.
const BEATS_PER_NOTE: usize = 2;

pub struct BassTrack;

impl TrackGenerator for BassTrack {
    fn render(&self, ctx: &TrackContext, _rng: &mut Pcg32) -> Vec<f64> {
        let mut track = vec![0.0; ctx.total_samples];

        let note_len = ctx.beat_length() * BEATS_PER_NOTE;
        let frequency = ctx.scale.root() / 2.0;

        let mut offset = 0;
        while offset < ctx.total_samples {
            let len = note_len.min(ctx.total_samples - offset);

            let tone = Waveform::Sine.render(frequency, len, ctx.sample_rate);
            let env = envelope::adsr(len, ctx.params.mood);
            let note: Vec<f64> = tone.iter().zip(&env).map(|(w, e)| w * e * GAIN).collect();
            accumulate(&mut track, offset, &note);

            offset += note_len;
        }

        PostChain {
            lowpass: Some(OnePole::new(FILTER_ALPHA)),
            echo: None,
        }
        .apply(&mut track, ctx.sample_rate);
        track
    }
}
