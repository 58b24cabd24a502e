//! Tunables for the rep counter and voice coach
//!
//! Every field has a default, so the browser can pass a partial object
//! (or nothing at all) and only override what it cares about.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pose::{HISTORY_SIZE, KEYPOINT_MIN_SCORE, MIN_CONFIDENCE};

/// Frames after a counted rep during which no transition can register
pub const COOLDOWN_FRAMES: u32 = 10;

/// Consecutive frames in the start position before counting begins
pub const FRAMES_TO_BE_READY: u32 = 5;

/// How far below the up threshold (degrees) a rep is called partial
pub const PARTIAL_REP_MARGIN: f32 = 15.0;

/// Torso tilt (degrees) inside (margin, 180 - margin) is too upright for a plank
pub const POSTURE_TILT_MARGIN: f32 = 45.0;

/// Minimum gap between two spoken utterances
pub const SPEECH_INTERVAL_MS: f64 = 2500.0;

/// Governing-angle thresholds for one exercise, in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Below this the exercise is in its "down" stage
    pub down: f32,
    /// Above this the exercise is back "up" (and a rep is counted)
    pub up: f32,
}

impl Thresholds {
    pub const PUSHUP: Thresholds = Thresholds { down: 100.0, up: 150.0 };
    pub const SQUAT: Thresholds = Thresholds { down: 110.0, up: 165.0 };

    fn validate(&self, exercise: &'static str) -> Result<(), ConfigError> {
        if !(self.down.is_finite() && self.up.is_finite()) || self.down >= self.up {
            return Err(ConfigError::InvertedThresholds {
                exercise,
                down: self.down,
                up: self.up,
            });
        }
        Ok(())
    }
}

/// Full coach configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Frames in the smoothing window
    pub history_len: usize,
    pub cooldown_frames: u32,
    pub frames_to_be_ready: u32,
    /// Frames whose average confidence is below this are not analysed
    pub min_confidence: f32,
    /// Joints must score above this to be used
    pub keypoint_min_score: f32,
    pub partial_rep_margin: f32,
    pub posture_tilt_margin: f32,
    pub speech_interval_ms: f64,
    pub pushup: Thresholds,
    pub squat: Thresholds,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            history_len: HISTORY_SIZE,
            cooldown_frames: COOLDOWN_FRAMES,
            frames_to_be_ready: FRAMES_TO_BE_READY,
            min_confidence: MIN_CONFIDENCE,
            keypoint_min_score: KEYPOINT_MIN_SCORE,
            partial_rep_margin: PARTIAL_REP_MARGIN,
            posture_tilt_margin: POSTURE_TILT_MARGIN,
            speech_interval_ms: SPEECH_INTERVAL_MS,
            pushup: Thresholds::PUSHUP,
            squat: Thresholds::SQUAT,
        }
    }
}

impl CoachConfig {
    /// Reject values that would make counting impossible or meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_len == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.frames_to_be_ready == 0 {
            return Err(ConfigError::ZeroReadyFrames);
        }
        for (name, value) in [
            ("min_confidence", self.min_confidence),
            ("keypoint_min_score", self.keypoint_min_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ConfidenceOutOfRange { name, value });
            }
        }
        if !(0.0..90.0).contains(&self.posture_tilt_margin) {
            return Err(ConfigError::TiltMarginOutOfRange(self.posture_tilt_margin));
        }
        if !self.partial_rep_margin.is_finite() || self.partial_rep_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.partial_rep_margin));
        }
        if !self.speech_interval_ms.is_finite() || self.speech_interval_ms < 0.0 {
            return Err(ConfigError::NegativeSpeechInterval(self.speech_interval_ms));
        }
        self.pushup.validate("pushup")?;
        self.squat.validate("squat")?;
        Ok(())
    }
}
