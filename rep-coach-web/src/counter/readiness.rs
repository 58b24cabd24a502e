//! Readiness gate - hold the start position before counting begins
//!
//! Stops incidental movement (walking into frame, kneeling down) from being
//! counted as reps. Re-arms whenever the user leaves the start position
//! before the latch closes.

use super::state::{ExerciseState, Stage};

pub struct ReadinessGate {
    /// Angle the user must stay above
    up_threshold: f32,
    /// Consecutive frames required
    frames_required: u32,
}

impl ReadinessGate {
    /// `frames_required` of 0 is treated as 1
    pub fn new(up_threshold: f32, frames_required: u32) -> Self {
        Self {
            up_threshold,
            frames_required: frames_required.max(1),
        }
    }

    /// Feed one frame's governing angle. Returns true once the latch is set.
    ///
    /// Does nothing if the state is already ready.
    pub fn observe(&self, state: &mut ExerciseState, angle: f32) -> bool {
        if state.is_ready {
            return true;
        }

        if angle > self.up_threshold {
            state.ready_frames += 1;
        } else {
            state.ready_frames = 0;
        }

        if state.ready_frames >= self.frames_required {
            state.is_ready = true;
            state.stage = Stage::Up;
            log::info!("Start position held for {} frames, counting enabled", state.ready_frames);
        }

        state.is_ready
    }
}
