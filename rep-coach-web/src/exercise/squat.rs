//! Squat analysis
//!
//! Governing angle: mean knee angle (hip→knee→ankle) of both legs.

use crate::config::CoachConfig;
use crate::counter::ExerciseState;
use crate::pose::{angle, Joint, Pose};

use super::kind::Exercise;
use super::result::AnalysisResult;
use super::tracker::{Messages, Tracker};
use super::ExerciseAnalyzer;

const MESSAGES: Messages = Messages {
    unclear: "Pose not clear - stand centered",
    missing_joints: "Ensure legs fully visible",
    not_ready: "Stand straight to begin",
    ready: "Start your squat",
    down: "Go lower - controlled descent!",
    up: "Great! Rep completed",
    partial: "Go deeper to complete the squat.",
    partial_voice: "Go a little deeper.",
};

const REQUIRED: [Joint; 6] = [
    Joint::LeftHip,
    Joint::LeftKnee,
    Joint::LeftAnkle,
    Joint::RightHip,
    Joint::RightKnee,
    Joint::RightAnkle,
];

pub struct SquatAnalyzer {
    tracker: Tracker,
}

impl SquatAnalyzer {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            tracker: Tracker::new(config.squat, config),
        }
    }
}

impl Default for SquatAnalyzer {
    fn default() -> Self {
        Self::new(&CoachConfig::default())
    }
}

impl ExerciseAnalyzer for SquatAnalyzer {
    fn exercise(&self) -> Exercise {
        Exercise::Squats
    }

    fn analyse(&mut self, pose: &Pose) -> AnalysisResult {
        let [l_hip, l_knee, l_ankle, r_hip, r_knee, r_ankle] =
            match self.tracker.prepare(pose, &REQUIRED) {
                Ok(joints) => joints,
                Err(gate) => return self.tracker.rejected(gate, &MESSAGES),
            };

        let knee = (angle(&l_hip, &l_knee, &l_ankle) + angle(&r_hip, &r_knee, &r_ankle)) / 2.0;
        self.tracker.evaluate(knee, &MESSAGES)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Stage;
    use crate::test_support::squat_pose;
    use pretty_assertions::assert_eq;

    fn run(analyzer: &mut SquatAnalyzer, angle: f32, frames: usize) -> Vec<AnalysisResult> {
        (0..frames).map(|_| analyzer.analyse(&squat_pose(angle, 0.9))).collect()
    }

    #[test]
    fn test_stand_straight_until_ready() {
        let mut analyzer = SquatAnalyzer::default();
        let results = run(&mut analyzer, 170.0, 5);

        for result in &results[..4] {
            assert_eq!(result.feedback, "Stand straight to begin");
        }
        assert_eq!(results[4].feedback, "Start your squat");
        assert!(analyzer.state().is_ready);
    }

    #[test]
    fn test_ten_reps() {
        let mut analyzer = SquatAnalyzer::default();
        run(&mut analyzer, 170.0, 8);

        for _ in 0..10 {
            run(&mut analyzer, 100.0, 16);
            run(&mut analyzer, 170.0, 16);
        }
        assert_eq!(analyzer.state().counter, 10);
        assert_eq!(analyzer.state().stage, Stage::Up);
    }

    #[test]
    fn test_transition_messages() {
        let mut analyzer = SquatAnalyzer::default();
        run(&mut analyzer, 170.0, 8);

        let down = run(&mut analyzer, 100.0, 16);
        assert_eq!(
            down.iter().filter(|r| r.feedback == "Go lower - controlled descent!").count(),
            1
        );
        assert!(down.iter().any(|r| r.voice_feedback.as_deref() == Some("Go a little deeper.")));

        let up = run(&mut analyzer, 170.0, 16);
        assert_eq!(up.iter().filter(|r| r.feedback == "Great! Rep completed").count(), 1);
        assert_eq!(up.last().unwrap().reps, 1);
    }

    #[test]
    fn test_shallow_squats_never_count() {
        let mut analyzer = SquatAnalyzer::default();
        run(&mut analyzer, 170.0, 8);

        for _ in 0..5 {
            run(&mut analyzer, 130.0, 16);
            run(&mut analyzer, 170.0, 16);
        }
        assert_eq!(analyzer.state().counter, 0);
    }

    #[test]
    fn test_legs_out_of_frame() {
        let mut analyzer = SquatAnalyzer::default();
        let mut pose = squat_pose(170.0, 0.9);
        for k in pose.keypoints.iter_mut().filter(|k| k.joint == Joint::LeftAnkle) {
            k.score = 0.1;
        }

        let result = analyzer.analyse(&pose);
        assert_eq!(result.feedback, "Ensure legs fully visible");
        assert_eq!(analyzer.state(), &ExerciseState::new());
    }

    #[test]
    fn test_blurry_frames_do_not_break_counting() {
        let mut analyzer = SquatAnalyzer::default();
        run(&mut analyzer, 170.0, 8);
        run(&mut analyzer, 100.0, 16);

        let blurry = analyzer.analyse(&squat_pose(170.0, 0.2));
        assert_eq!(blurry.feedback, "Pose not clear - stand centered");
        assert_eq!(blurry.stage, Stage::Down);

        run(&mut analyzer, 170.0, 16);
        assert_eq!(analyzer.state().counter, 1);
    }
}
