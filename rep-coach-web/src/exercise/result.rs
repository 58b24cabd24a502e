//! Per-frame analysis output handed to the display and voice layers

use serde::Serialize;

use crate::counter::Stage;

/// What one frame produced for the user
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Completed repetitions so far
    pub reps: u32,
    /// Short status line for the screen
    pub feedback: String,
    pub stage: Stage,
    /// Correction worth saying out loud, if any
    pub voice_feedback: Option<String>,
}

impl AnalysisResult {
    pub fn new(reps: u32, feedback: impl Into<String>, stage: Stage) -> Self {
        Self {
            reps,
            feedback: feedback.into(),
            stage,
            voice_feedback: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice_feedback = Some(voice.into());
        self
    }
}
