//! Counter module - readiness latch and debounced rep state machine
//!
//! Re-exports only. All logic in submodules.

mod state;
mod readiness;
mod state_machine;

pub use state::{ExerciseState, Stage, Transition};
pub use readiness::ReadinessGate;
pub use state_machine::RepCounter;
