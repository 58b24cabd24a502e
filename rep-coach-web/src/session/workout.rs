//! Workout session - the per-frame entry point for a host
//!
//! Owns one analyzer per exercise and the voice coordinator. The host runs
//! the frame loop: call `start`, then `advance` once per video frame, then
//! `stop`. Nothing here reads a clock or schedules work on its own.

use serde::Serialize;

use super::clock::{format_elapsed, ElapsedClock};
use crate::config::CoachConfig;
use crate::error::ConfigError;
use crate::exercise::{AnalysisResult, Exercise, ExerciseAnalyzer, PushupAnalyzer, SquatAnalyzer};
use crate::pose::Pose;
use crate::voice::{SpeechSink, VoiceCoordinator};

pub const STATUS_STARTED: &str = "Camera started. Get in position.";
pub const STATUS_STOPPED: &str = "Camera stopped.";

/// Everything the UI needs after one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub result: AnalysisResult,
    /// Display text differs from the previous frame's
    pub feedback_changed: bool,
    /// Rep count to show (never goes down during a run)
    pub reps: u32,
    /// Utterance sent to the speech sink this frame
    pub spoken: Option<String>,
}

pub struct Session {
    exercise: Exercise,
    pushup: PushupAnalyzer,
    squat: SquatAnalyzer,
    voice: VoiceCoordinator,
    clock: ElapsedClock,
    running: bool,
    status: String,
    last_feedback: String,
    display_reps: u32,
}

impl Session {
    pub fn new(config: CoachConfig) -> Result<Self, ConfigError> {
        let voice = VoiceCoordinator::new(config.speech_interval_ms);
        Self::with_voice(config, voice)
    }

    /// Session with a caller-built voice coordinator (e.g. seeded for tests)
    pub fn with_voice(config: CoachConfig, voice: VoiceCoordinator) -> Result<Self, ConfigError> {
        config.validate()?;
        let exercise = Exercise::default();

        Ok(Self {
            exercise,
            pushup: PushupAnalyzer::new(&config),
            squat: SquatAnalyzer::new(&config),
            voice,
            clock: ElapsedClock::new(),
            running: false,
            status: selected_status(exercise),
            last_feedback: String::new(),
            display_reps: 0,
        })
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latest status line (lifecycle message or analyzer feedback)
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn display_reps(&self) -> u32 {
        self.display_reps
    }

    /// Analyzer for the selected exercise
    pub fn analyzer(&self) -> &dyn ExerciseAnalyzer {
        match self.exercise {
            Exercise::Pushups => &self.pushup,
            Exercise::Squats => &self.squat,
        }
    }

    fn analyzer_mut(&mut self) -> &mut dyn ExerciseAnalyzer {
        match self.exercise {
            Exercise::Pushups => &mut self.pushup,
            Exercise::Squats => &mut self.squat,
        }
    }

    /// Switch exercise. A running session is stopped first; counters reset.
    pub fn select_exercise(&mut self, exercise: Exercise, sink: &mut dyn SpeechSink) {
        if self.running {
            self.stop(sink);
        }
        self.exercise = exercise;
        self.clear_counters();
        self.status = selected_status(exercise);
        log::info!("Selected {}", exercise);
    }

    /// Begin a run at `now_ms` with fresh counters
    pub fn start(&mut self, now_ms: f64) {
        self.clear_counters();
        self.running = true;
        self.clock.start(now_ms);
        self.status = STATUS_STARTED.to_string();
        self.last_feedback = STATUS_STARTED.to_string();
        log::info!("{} session started", self.exercise);
    }

    /// End the run: silence speech, stop the clock and reset all counters
    pub fn stop(&mut self, sink: &mut dyn SpeechSink) {
        self.running = false;
        self.voice.cancel(sink);
        self.clear_counters();
        self.clock.stop();
        self.status = STATUS_STOPPED.to_string();
        log::info!("{} session stopped", self.exercise);
    }

    /// Zero every counter at `now_ms`. A running workout keeps going with
    /// its clock restarted from the reset.
    pub fn reset(&mut self, now_ms: f64) {
        self.clear_counters();
        if self.running {
            self.clock.start(now_ms);
        } else {
            self.clock.stop();
        }
        log::info!("{} counters reset", self.exercise);
    }

    /// Reset every exercise and the voice memory; the clock is left alone
    fn clear_counters(&mut self) {
        self.pushup.reset();
        self.squat.reset();
        self.voice.reset();
        self.display_reps = 0;
        self.last_feedback.clear();
    }

    /// Process one frame.
    ///
    /// Returns `None` when stopped or when no person was detected; neither
    /// touches any counting state.
    pub fn advance(
        &mut self,
        pose: Option<&Pose>,
        now_ms: f64,
        sink: &mut dyn SpeechSink,
    ) -> Option<FrameReport> {
        if !self.running {
            log::debug!("Frame ignored, session not running");
            return None;
        }
        let pose = pose?;

        let result = self.analyzer_mut().analyse(pose);

        let feedback_changed = result.feedback != self.last_feedback;
        if feedback_changed {
            self.last_feedback.clone_from(&result.feedback);
            self.status.clone_from(&result.feedback);
        }

        self.display_reps = self.display_reps.max(result.reps);
        let spoken = self.voice.observe(&result, now_ms, sink);

        Some(FrameReport {
            reps: self.display_reps,
            result,
            feedback_changed,
            spoken,
        })
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        self.clock.elapsed_secs(now_ms)
    }

    /// Elapsed time as `MM:SS`
    pub fn elapsed_label(&self, now_ms: f64) -> String {
        format_elapsed(self.elapsed_secs(now_ms))
    }
}

fn selected_status(exercise: Exercise) -> String {
    format!("Selected {}. Press start.", exercise)
}
