//! Rep state machine - up/down transitions with hysteresis and cooldown
//!
//! Shared by every exercise; only the thresholds differ. The down threshold
//! sits well below the up threshold so an angle hovering around one
//! boundary cannot chatter between stages.

use super::readiness::ReadinessGate;
use super::state::{ExerciseState, Stage, Transition};
use crate::config::Thresholds;

/// Debounced rep counter for one set of thresholds
pub struct RepCounter {
    thresholds: Thresholds,
    /// Frames suppressed after each counted rep
    cooldown_frames: u32,
    gate: ReadinessGate,
}

impl RepCounter {
    pub fn new(thresholds: Thresholds, cooldown_frames: u32, frames_to_be_ready: u32) -> Self {
        Self {
            thresholds,
            cooldown_frames,
            gate: ReadinessGate::new(thresholds.up, frames_to_be_ready),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Advance the state machine by one frame.
    ///
    /// At most one transition fires per call. A rep is counted only on
    /// the down→up transition, and never while the user is not ready.
    pub fn update(&self, state: &mut ExerciseState, angle: f32) -> Option<Transition> {
        if !state.is_ready {
            self.gate.observe(state, angle);
            return None;
        }

        // Cooldown prevents double counts right after a rep
        if state.cooldown > 0 {
            state.cooldown -= 1;
            return None;
        }

        match state.stage {
            Stage::Up if angle < self.thresholds.down => {
                state.stage = Stage::Down;
                log::debug!("Stage down at {:.1}°", angle);
                Some(Transition::Down)
            }
            Stage::Down if angle > self.thresholds.up => {
                state.stage = Stage::Up;
                state.counter += 1;
                state.cooldown = self.cooldown_frames;
                log::info!("Rep {} counted at {:.1}°", state.counter, angle);
                Some(Transition::Up)
            }
            _ => None,
        }
    }
}
