//! Exercise state - the mutable record behind one exercise's rep count

use serde::Serialize;

/// Phase of a repetition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Start/finish position (arms or legs extended)
    #[default]
    Up,
    /// Bottom of the movement
    Down,
}

/// Stage change reported by the rep state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Reached the bottom of a rep
    Down,
    /// Came back up; a rep was counted
    Up,
}

/// Counting state for a single exercise
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseState {
    pub stage: Stage,

    /// Completed repetitions (never decreases until reset)
    pub counter: u32,

    /// Frames left before another transition may register
    pub cooldown: u32,

    /// Has the user held the start position long enough?
    pub is_ready: bool,

    /// Consecutive frames seen in the start position so far
    pub ready_frames: u32,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial values (stage up, nothing counted, not ready)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop the readiness latch; the user has to re-assume the start position
    pub fn disarm(&mut self) {
        if self.is_ready {
            log::debug!("Readiness lost at {} reps", self.counter);
        }
        self.is_ready = false;
        self.ready_frames = 0;
    }
}
