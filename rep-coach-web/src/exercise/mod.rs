//! Exercise module - per-exercise pose analysis
//!
//! Each analyzer owns its own counting state and smoothing history.
//! Re-exports and the shared trait only; logic in submodules.

mod kind;
mod result;
mod tracker;
mod pushup;
mod squat;

pub use kind::Exercise;
pub use result::AnalysisResult;
pub use pushup::PushupAnalyzer;
pub use squat::SquatAnalyzer;

use crate::counter::ExerciseState;
use crate::pose::Pose;

/// Turns one raw pose per frame into a rep count and feedback
pub trait ExerciseAnalyzer {
    fn exercise(&self) -> Exercise;

    /// Analyse the latest raw pose
    fn analyse(&mut self, pose: &Pose) -> AnalysisResult;

    /// Read-only view of the counting state
    fn state(&self) -> &ExerciseState;

    /// Frames currently in the smoothing window
    fn history_len(&self) -> usize;

    /// Clear history, counter, stage, cooldown and readiness
    fn reset(&mut self);
}
