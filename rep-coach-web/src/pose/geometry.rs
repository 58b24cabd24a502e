//! Joint angles and confidence checks
//!
//! Angles are planar, measured at a vertex joint between the rays to its
//! two neighbours (shoulder→elbow→wrist, hip→knee→ankle).

use nalgebra::Vector2;

use super::keypoint::{Joint, Keypoint, Pose};

/// Default floor a joint must score above to be used in an angle
pub const KEYPOINT_MIN_SCORE: f32 = 0.3;

/// Default minimum average confidence for a frame to be analysed
pub const MIN_CONFIDENCE: f32 = 0.5;

/// Find a joint scoring strictly above `min_score`
pub fn find_keypoint(pose: &Pose, joint: Joint, min_score: f32) -> Option<Keypoint> {
    pose.keypoint_above(joint, min_score)
}

/// Mean confidence over the joints scoring strictly above `min_confidence`
///
/// Returns 0 when no joint qualifies.
pub fn average_confidence(pose: &Pose, min_confidence: f32) -> f32 {
    pose.mean_score_above(min_confidence)
}

/// Angle at `b` in degrees, between rays b→a and b→c
///
/// Returns a value in [0, 180]; reflex angles are folded back.
pub fn angle(a: &Keypoint, b: &Keypoint, c: &Keypoint) -> f32 {
    let to_a: Vector2<f32> = a.position() - b.position();
    let to_c: Vector2<f32> = c.position() - b.position();

    let radians = to_c.y.atan2(to_c.x) - to_a.y.atan2(to_a.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Inclination of the shoulder→hip segment in degrees, in [0, 180]
///
/// - ~0° or ~180° = torso horizontal (plank)
/// - ~90° = torso vertical (standing)
pub fn torso_tilt(shoulder: &Keypoint, hip: &Keypoint) -> f32 {
    let torso: Vector2<f32> = hip.position() - shoulder.position();
    torso.y.atan2(torso.x).to_degrees().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(x: f32, y: f32) -> Keypoint {
        Keypoint::new(Joint::Nose, x, y, 1.0)
    }

    #[test]
    fn test_straight_limb() {
        let angle = angle(&kp(0.0, 0.0), &kp(0.5, 0.0), &kp(1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle(&kp(0.0, 0.0), &kp(0.5, 0.0), &kp(0.5, 0.5));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflex_angle_is_folded() {
        // Raw atan2 difference here is 270°
        let a = kp(-1.0, -1.0);
        let b = kp(0.0, 0.0);
        let c = kp(-1.0, 1.0);
        let folded = angle(&a, &b, &c);
        assert!((folded - 90.0).abs() < 1e-3);
        assert!((angle(&c, &b, &a) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_stays_in_range() {
        for step in 0..36 {
            let theta = (step as f32 * 10.0).to_radians();
            let c = kp(theta.cos(), theta.sin());
            let value = angle(&kp(1.0, 0.0), &kp(0.0, 0.0), &c);
            assert!((0.0..=180.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn test_torso_tilt() {
        let shoulder = kp(0.0, 0.0);
        assert!(torso_tilt(&shoulder, &kp(10.0, 0.0)) < 1e-3);
        assert!((torso_tilt(&shoulder, &kp(0.0, 10.0)) - 90.0).abs() < 1e-3);
        assert!((torso_tilt(&shoulder, &kp(-10.0, 0.0)) - 180.0).abs() < 1e-3);
        assert!((torso_tilt(&shoulder, &kp(0.0, -10.0)) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_find_keypoint_requires_confidence() {
        let pose = Pose::new(vec![
            Keypoint::new(Joint::LeftElbow, 0.0, 0.0, 0.25),
            Keypoint::new(Joint::RightElbow, 0.0, 0.0, 0.35),
        ]);
        assert!(find_keypoint(&pose, Joint::LeftElbow, KEYPOINT_MIN_SCORE).is_none());
        assert!(find_keypoint(&pose, Joint::RightElbow, KEYPOINT_MIN_SCORE).is_some());
        assert!(find_keypoint(&pose, Joint::Nose, KEYPOINT_MIN_SCORE).is_none());

        // A stricter floor rejects the same elbow
        assert!(find_keypoint(&pose, Joint::RightElbow, 0.4).is_none());
    }

    #[test]
    fn test_average_confidence() {
        let weak = Pose::new(vec![Keypoint::new(Joint::Nose, 0.0, 0.0, 0.4)]);
        assert_eq!(average_confidence(&weak, MIN_CONFIDENCE), 0.0);
        assert!((average_confidence(&weak, 0.2) - 0.4).abs() < 1e-6);

        let strong = Pose::new(vec![
            Keypoint::new(Joint::Nose, 0.0, 0.0, 0.6),
            Keypoint::new(Joint::LeftEye, 0.0, 0.0, 1.0),
        ]);
        assert!((average_confidence(&strong, MIN_CONFIDENCE) - 0.8).abs() < 1e-6);
        assert!((average_confidence(&strong, 0.7) - 1.0).abs() < 1e-6);
    }
}
