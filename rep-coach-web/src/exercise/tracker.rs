//! Shared per-exercise pipeline: confidence gate, smoothing, joint lookup,
//! rep state machine and feedback selection.
//!
//! Each analyzer owns one tracker; nothing here is shared between exercises.

use crate::config::{CoachConfig, Thresholds};
use crate::counter::{ExerciseState, RepCounter, Stage, Transition};
use crate::pose::{average_confidence, find_keypoint, Joint, Keypoint, KeypointSmoother, Pose};

use super::result::AnalysisResult;

/// Why a frame was not analysed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameGate {
    /// Average confidence below the floor
    Unclear,
    /// A required joint is missing or too weak after smoothing
    MissingJoints,
}

/// Status lines for one exercise
pub(crate) struct Messages {
    pub unclear: &'static str,
    pub missing_joints: &'static str,
    pub not_ready: &'static str,
    pub ready: &'static str,
    pub down: &'static str,
    pub up: &'static str,
    pub partial: &'static str,
    pub partial_voice: &'static str,
}

pub(crate) struct Tracker {
    pub state: ExerciseState,
    smoother: KeypointSmoother,
    counter: RepCounter,
    min_confidence: f32,
    keypoint_min_score: f32,
    partial_rep_margin: f32,
}

impl Tracker {
    pub fn new(thresholds: Thresholds, config: &CoachConfig) -> Self {
        Self {
            state: ExerciseState::new(),
            smoother: KeypointSmoother::with_capacity(config.history_len),
            counter: RepCounter::new(
                thresholds,
                config.cooldown_frames,
                config.frames_to_be_ready,
            ),
            min_confidence: config.min_confidence,
            keypoint_min_score: config.keypoint_min_score,
            partial_rep_margin: config.partial_rep_margin,
        }
    }

    /// Gate, buffer and smooth the frame, then pull out the required joints
    /// in the order given.
    ///
    /// A low-confidence frame is rejected before it touches the history.
    pub fn prepare<const N: usize>(
        &mut self,
        pose: &Pose,
        required: &[Joint; N],
    ) -> Result<[Keypoint; N], FrameGate> {
        let confidence = average_confidence(pose, self.min_confidence);
        if confidence < self.min_confidence {
            log::debug!("Frame skipped, average confidence {:.2}", confidence);
            return Err(FrameGate::Unclear);
        }

        self.smoother.push(pose.clone());
        let smoothed = self.smoother.smoothed();

        let found: Option<Vec<Keypoint>> = required
            .iter()
            .map(|joint| find_keypoint(&smoothed, *joint, self.keypoint_min_score))
            .collect();

        match found {
            Some(joints) => <[Keypoint; N]>::try_from(joints).map_err(|_| FrameGate::MissingJoints),
            None => {
                log::debug!("Frame skipped, required joints not visible");
                Err(FrameGate::MissingJoints)
            }
        }
    }

    /// Run the state machine on the governing angle and pick the status line
    pub fn evaluate(&mut self, angle: f32, messages: &Messages) -> AnalysisResult {
        let transition = self.counter.update(&mut self.state, angle);

        if !self.state.is_ready {
            return self.status(messages.not_ready);
        }

        if self.is_partial(angle) {
            return self.status(messages.partial).with_voice(messages.partial_voice);
        }

        let feedback = match transition {
            Some(Transition::Down) => messages.down,
            Some(Transition::Up) => messages.up,
            None => messages.ready,
        };
        self.status(feedback)
    }

    /// Status line for a frame that never reached the state machine
    pub fn rejected(&self, gate: FrameGate, messages: &Messages) -> AnalysisResult {
        match gate {
            FrameGate::Unclear => self.status(messages.unclear),
            FrameGate::MissingJoints => self.status(messages.missing_joints),
        }
    }

    pub fn status(&self, feedback: &str) -> AnalysisResult {
        AnalysisResult::new(self.state.counter, feedback, self.state.stage)
    }

    pub fn history_len(&self) -> usize {
        self.smoother.len()
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.smoother.clear();
    }

    /// Still in the up stage but sagging well short of full extension
    /// without reaching the bottom: the user stopped halfway.
    fn is_partial(&self, angle: f32) -> bool {
        let thresholds = self.counter.thresholds();
        self.state.stage == Stage::Up
            && angle < thresholds.up - self.partial_rep_margin
            && angle > thresholds.down
    }
}
