//! Pushup analysis
//!
//! Governing angle: mean elbow angle (shoulder→elbow→wrist) of both arms.
//! A plank check on the shoulder→hip line runs first so that someone
//! standing and bending their arms is not counted.

use crate::config::CoachConfig;
use crate::counter::ExerciseState;
use crate::pose::{angle, torso_tilt, Joint, Pose};

use super::kind::Exercise;
use super::result::AnalysisResult;
use super::tracker::{Messages, Tracker};
use super::ExerciseAnalyzer;

pub const GET_INTO_POSITION: &str = "Get into pushup position";

const MESSAGES: Messages = Messages {
    unclear: "Pose not clear - move closer to camera",
    missing_joints: "Keep full arms and hips in frame",
    not_ready: GET_INTO_POSITION,
    ready: "Start your pushup",
    down: "Lower down - good form!",
    up: "Push up - rep counted!",
    partial: "Lower your chest for a full rep.",
    partial_voice: "Try for a full range of motion.",
};

const REQUIRED: [Joint; 8] = [
    Joint::LeftShoulder,
    Joint::LeftElbow,
    Joint::LeftWrist,
    Joint::RightShoulder,
    Joint::RightElbow,
    Joint::RightWrist,
    Joint::LeftHip,
    Joint::RightHip,
];

pub struct PushupAnalyzer {
    tracker: Tracker,
    /// Tilt inside (margin, 180 - margin) means the torso is too upright
    tilt_margin: f32,
}

impl PushupAnalyzer {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            tracker: Tracker::new(config.pushup, config),
            tilt_margin: config.posture_tilt_margin,
        }
    }
}

impl Default for PushupAnalyzer {
    fn default() -> Self {
        Self::new(&CoachConfig::default())
    }
}

impl ExerciseAnalyzer for PushupAnalyzer {
    fn exercise(&self) -> Exercise {
        Exercise::Pushups
    }

    fn analyse(&mut self, pose: &Pose) -> AnalysisResult {
        let [l_shoulder, l_elbow, l_wrist, r_shoulder, r_elbow, r_wrist, l_hip, r_hip] =
            match self.tracker.prepare(pose, &REQUIRED) {
                Ok(joints) => joints,
                Err(gate) => return self.tracker.rejected(gate, &MESSAGES),
            };

        let tilt = (torso_tilt(&l_shoulder, &l_hip) + torso_tilt(&r_shoulder, &r_hip)) / 2.0;
        if tilt > self.tilt_margin && tilt < 180.0 - self.tilt_margin {
            log::debug!("Torso too upright for a plank ({:.1}°)", tilt);
            self.tracker.state.disarm();
            return self
                .tracker
                .status(GET_INTO_POSITION)
                .with_voice(GET_INTO_POSITION);
        }

        let elbow = (angle(&l_shoulder, &l_elbow, &l_wrist) + angle(&r_shoulder, &r_elbow, &r_wrist)) / 2.0;
        self.tracker.evaluate(elbow, &MESSAGES)
    }

    fn state(&self) -> &ExerciseState {
        &self.tracker.state
    }

    fn history_len(&self) -> usize {
        self.tracker.history_len()
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
