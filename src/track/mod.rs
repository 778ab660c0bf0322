//! Track generators — each renders one instrument part across the full
//! render, then hands the buffer to the mixer.
//!
//! The three parts share one pipeline shape (schedule notes → envelope →
//! accumulate → filter → echo) and differ only in their scheduling rule and
//! tone policy, so the shared pieces live here.

pub mod bass;
pub mod melody;
pub mod percussion;

pub use bass::BassTrack;
pub use melody::MelodyTrack;
pub use percussion::{HitStyle, PercussionTrack};

use rand_pcg::Pcg32;

use crate::dsp::filter::OnePole;
use crate::dsp::reverb::Echo;
use crate::params::ControlParameters;
use crate::theory::Scale;

/// Read-only state shared by every generator within one render.
pub struct TrackContext<'a> {
    pub params: &'a ControlParameters,
    pub scale: &'a Scale,
    pub sample_rate: f64,
    pub total_samples: usize,
}

impl TrackContext<'_> {
    /// One beat in samples, truncated, floored to a single sample so the
    /// beat grid can always advance.
    pub fn beat_length(&self) -> usize {
        let beats_per_second = self.params.tempo_bpm / 60.0;
        ((self.sample_rate / beats_per_second) as usize).max(1)
    }
}

/// A part generator: renders its instrument over the whole buffer.
///
/// Generators only read the context; randomness comes exclusively from the
/// injected render RNG.
pub trait TrackGenerator {
    fn render(&self, ctx: &TrackContext, rng: &mut Pcg32) -> Vec<f64>;
}

/// Whole-track post-processing: optional lowpass, then optional echo.
pub struct PostChain {
    pub lowpass: Option<OnePole>,
    pub echo: Option<Echo>,
}

impl PostChain {
    pub fn apply(&self, track: &mut Vec<f64>, sample_rate: f64) {
        if let Some(filter) = self.lowpass {
            filter.process(track);
        }
        if let Some(echo) = self.echo {
            *track = echo.process(track, sample_rate);
        }
    }
}

/// Accumulate a shaped note into the track at `offset`. The caller
/// guarantees the note fits (final notes are truncated to capacity).
pub(crate) fn accumulate(track: &mut [f64], offset: usize, note: &[f64]) {
    for (slot, &s) in track[offset..offset + note.len()].iter_mut().zip(note) {
        *slot += s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ControlParameters;
    use crate::theory::Scale;

    fn test_ctx<'a>(
        params: &'a ControlParameters,
        scale: &'a Scale,
        seconds: f64,
    ) -> TrackContext<'a> {
        TrackContext {
            params,
            scale,
            sample_rate: 44100.0,
            total_samples: (44100.0 * seconds) as usize,
        }
    }

    #[test]
    fn beat_length_follows_tempo() {
        let params = ControlParameters {
            tempo_bpm: 120.0,
            ..Default::default()
        };
        let scale = Scale::build(0, false);
        let ctx = test_ctx(&params, &scale, 1.0);
        assert_eq!(ctx.beat_length(), 22050, "120 BPM at 44.1 kHz is half a second");
    }

    #[test]
    fn beat_length_never_collapses_to_zero() {
        let params = ControlParameters {
            tempo_bpm: 1e9,
            ..Default::default()
        };
        let scale = Scale::build(0, false);
        let ctx = test_ctx(&params, &scale, 1.0);
        assert!(ctx.beat_length() >= 1);
    }

    #[test]
    fn accumulate_adds_in_place() {
        let mut track = vec![1.0; 6];
        accumulate(&mut track, 2, &[0.5, -1.0]);
        assert_eq!(track, vec![1.0, 1.0, 1.5, 0.0, 1.0, 1.0]);
    }
}
