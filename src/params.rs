//! Control parameters and render configuration — the crate's entry boundary.
//!
//! The upstream model emits a flat 7-element numeric vector. Everything past
//! this module works with the validated `ControlParameters` record instead of
//! positional indices, so malformed input is rejected before any synthesis
//! begins.

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, SynthError};
use crate::theory;

/// Length of the raw parameter vector:
/// [tempo_bpm, key_index, is_minor, mood, rhythm_complexity,
///  melody_pattern_id, percussion_level].
pub const PARAM_VECTOR_LEN: usize = 7;

/// Validated musical control parameters for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlParameters {
    /// Tempo in beats per minute. Finite and strictly positive.
    pub tempo_bpm: f64,
    /// Semitone offset of the scale root, 0–11.
    pub key_index: u8,
    /// Minor mode when true, major otherwise.
    pub is_minor: bool,
    /// Mood in [0, 1]. Raises note sustain and melody gain.
    pub mood: f64,
    /// Rhythm complexity in [0, 1]. Subdivides melody beats.
    pub rhythm_complexity: f64,
    /// Melody pattern selector, reduced modulo the pattern table size.
    pub melody_pattern_id: usize,
    /// Per-beat percussion trigger probability in [0, 1].
    pub percussion_level: f64,
}

impl ControlParameters {
    /// Build from typed values, rejecting or clamping as documented on the
    /// fields.
    pub fn new(
        tempo_bpm: f64,
        key_index: u8,
        is_minor: bool,
        mood: f64,
        rhythm_complexity: f64,
        melody_pattern_id: usize,
        percussion_level: f64,
    ) -> Result<Self, SynthError> {
        ControlParameters {
            tempo_bpm,
            key_index,
            is_minor,
            mood,
            rhythm_complexity,
            melody_pattern_id,
            percussion_level,
        }
        .validated()
    }

    /// Build from the raw model output vector.
    pub fn from_vector(values: &[f64]) -> Result<Self, SynthError> {
        if values.len() != PARAM_VECTOR_LEN {
            return Err(ParamError::WrongArity {
                expected: PARAM_VECTOR_LEN,
                found: values.len(),
            }
            .into());
        }

        const NAMES: [&str; PARAM_VECTOR_LEN] = [
            "tempo_bpm",
            "key_index",
            "is_minor",
            "mood",
            "rhythm_complexity",
            "melody_pattern_id",
            "percussion_level",
        ];
        for (&name, &value) in NAMES.iter().zip(values) {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name }.into());
            }
        }

        ControlParameters {
            tempo_bpm: values[0],
            key_index: values[1].round().clamp(0.0, 11.0) as u8,
            is_minor: values[2] != 0.0,
            mood: values[3],
            rhythm_complexity: values[4],
            melody_pattern_id: (values[5].round() as i64)
                .rem_euclid(theory::PATTERN_COUNT as i64) as usize,
            percussion_level: values[6],
        }
        .validated()
    }

    /// Build from a JSON object payload (the app-facing form of the vector).
    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        let params: ControlParameters = serde_json::from_str(json).map_err(|e| {
            SynthError::Param(ParamError::Malformed {
                message: e.to_string(),
            })
        })?;
        params.validated()
    }

    /// Reject unusable values, clamp bounded ones into their ranges.
    fn validated(mut self) -> Result<Self, SynthError> {
        if !self.tempo_bpm.is_finite() {
            return Err(ParamError::NonFinite { name: "tempo_bpm" }.into());
        }
        if self.tempo_bpm <= 0.0 {
            return Err(ParamError::OutOfRange {
                name: "tempo_bpm",
                value: self.tempo_bpm,
            }
            .into());
        }
        for (name, value) in [
            ("mood", self.mood),
            ("rhythm_complexity", self.rhythm_complexity),
            ("percussion_level", self.percussion_level),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name }.into());
            }
        }

        self.key_index = self.key_index.min(11);
        self.mood = self.mood.clamp(0.0, 1.0);
        self.rhythm_complexity = self.rhythm_complexity.clamp(0.0, 1.0);
        self.percussion_level = self.percussion_level.clamp(0.0, 1.0);
        self.melody_pattern_id %= theory::PATTERN_COUNT;
        Ok(self)
    }
}

impl Default for ControlParameters {
    fn default() -> Self {
        ControlParameters {
            tempo_bpm: 120.0,
            key_index: 0,
            is_minor: false,
            mood: 0.5,
            rhythm_complexity: 0.5,
            melody_pattern_id: 0,
            percussion_level: 0.5,
        }
    }
}

/// Session configuration held by the engine — never process-wide state, so
/// renders with different settings can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Render length in seconds.
    pub duration_seconds: f64,
}

impl RenderConfig {
    pub fn new(sample_rate: u32, duration_seconds: f64) -> Result<Self, SynthError> {
        if sample_rate == 0 {
            return Err(ParamError::OutOfRange {
                name: "sample_rate",
                value: 0.0,
            }
            .into());
        }
        if !duration_seconds.is_finite() {
            return Err(ParamError::NonFinite {
                name: "duration_seconds",
            }
            .into());
        }
        if duration_seconds < 0.0 {
            return Err(ParamError::OutOfRange {
                name: "duration_seconds",
                value: duration_seconds,
            }
            .into());
        }
        Ok(RenderConfig {
            sample_rate,
            duration_seconds,
        })
    }

    /// Total samples per channel, rounded down.
    pub fn total_samples(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64) as usize
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sample_rate: 44100,
            duration_seconds: 12.0,
        }
    }
}
