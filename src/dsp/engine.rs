//! Render engine — turns validated parameters into a stereo buffer.
//!
//! One render is a single pass: build the scale, render the three parts
//! against it, then master them into a normalized stereo pair. The three
//! generators share only read-only state plus the render-owned RNG, so a
//! render is fully determined by (config, parameters, seed).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::params::{ControlParameters, RenderConfig};
use crate::theory::Scale;
use crate::track::{
    BassTrack, HitStyle, MelodyTrack, PercussionTrack, TrackContext, TrackGenerator,
};

use super::mixer;
use super::renderer;

/// Final stereo output of one render. Peak magnitude ≤ 1.0 by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
    pub sample_rate: u32,
}

/// The audio rendering engine.
pub struct Engine {
    pub config: RenderConfig,
    /// Percussion hit palette. `NoiseTransient` unless overridden.
    pub percussion_style: HitStyle,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        Engine {
            config,
            percussion_style: HitStyle::default(),
        }
    }

    /// Switch the percussion palette (e.g. the drum kit voicing).
    pub fn with_percussion_style(mut self, style: HitStyle) -> Self {
        self.percussion_style = style;
        self
    }

    /// Render with a seed drawn from the environment. Use
    /// [`Engine::render_seeded`] when reproducibility matters.
    pub fn render(&self, params: &ControlParameters) -> RenderResult {
        self.render_seeded(params, rand::rng().random())
    }

    /// Render deterministically: identical (config, params, seed) triples
    /// produce bit-identical output.
    pub fn render_seeded(&self, params: &ControlParameters, seed: u64) -> RenderResult {
        let total_samples = self.config.total_samples();
        let scale = Scale::build(params.key_index, params.is_minor);
        let ctx = TrackContext {
            params,
            scale: &scale,
            sample_rate: self.config.sample_rate as f64,
            total_samples,
        };
        let mut rng = Pcg32::seed_from_u64(seed);

        log::debug!(
            "rendering {total_samples} samples at {} Hz (tempo {}, seed {seed})",
            self.config.sample_rate,
            params.tempo_bpm
        );

        let melody = MelodyTrack.render(&ctx, &mut rng);
        let bass = BassTrack.render(&ctx, &mut rng);
        let percussion = PercussionTrack::new(self.percussion_style).render(&ctx, &mut rng);

        let (left, right) = mixer::master(&[melody, bass, percussion]);
        log::debug!("render complete, peak {:.3}", mixer::peak(&left).max(mixer::peak(&right)));

        RenderResult {
            left: left.into_iter().map(|s| s as f32).collect(),
            right: right.into_iter().map(|s| s as f32).collect(),
            sample_rate: self.config.sample_rate,
        }
    }

    /// Render to interleaved stereo i16 PCM (for WAV export).
    pub fn render_pcm_i16(&self, params: &ControlParameters, seed: u64) -> Vec<i16> {
        renderer::quantize_i16(&self.render_seeded(params, seed))
    }
}
