//! Synthetic poses for tests
//!
//! Joints are laid out so the governing angle comes out exactly as asked
//! (before smoothing): the distal joint is rotated around the vertex
//! starting from a ray that points straight up at the proximal joint.

use crate::pose::{Joint, Keypoint, Pose};

/// Point at `radius` from `vertex` forming `angle_deg` with the upward ray
fn limb_end(vertex: (f32, f32), radius: f32, angle_deg: f32) -> (f32, f32) {
    let phi = (angle_deg - 90.0).to_radians();
    (vertex.0 + radius * phi.cos(), vertex.1 + radius * phi.sin())
}

fn push(points: &mut Vec<Keypoint>, joint: Joint, at: (f32, f32), score: f32) {
    points.push(Keypoint::new(joint, at.0, at.1, score));
}

/// Plank with both elbows at `elbow_angle` degrees
pub fn pushup_pose(elbow_angle: f32, score: f32) -> Pose {
    let mut points = Vec::new();
    push(&mut points, Joint::Nose, (150.0, 210.0), score);

    for (x, y, shoulder, elbow, wrist, hip) in [
        (200.0, 200.0, Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist, Joint::LeftHip),
        (220.0, 195.0, Joint::RightShoulder, Joint::RightElbow, Joint::RightWrist, Joint::RightHip),
    ] {
        let elbow_at = (x, y + 80.0);
        push(&mut points, shoulder, (x, y), score);
        push(&mut points, elbow, elbow_at, score);
        push(&mut points, wrist, limb_end(elbow_at, 80.0, elbow_angle), score);
        push(&mut points, hip, (x + 200.0, y + 10.0), score);
    }

    Pose::new(points)
}

/// Upright torso with arms hanging: fails the plank check
pub fn standing_pushup_pose(score: f32) -> Pose {
    let mut points = Vec::new();

    for (x, shoulder, elbow, wrist, hip) in [
        (200.0, Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist, Joint::LeftHip),
        (260.0, Joint::RightShoulder, Joint::RightElbow, Joint::RightWrist, Joint::RightHip),
    ] {
        push(&mut points, shoulder, (x, 100.0), score);
        push(&mut points, elbow, (x, 180.0), score);
        push(&mut points, wrist, (x, 260.0), score);
        push(&mut points, hip, (x + 5.0, 300.0), score);
    }

    Pose::new(points)
}

/// Standing figure with both knees at `knee_angle` degrees
pub fn squat_pose(knee_angle: f32, score: f32) -> Pose {
    let mut points = Vec::new();

    for (x, hip, knee, ankle) in [
        (300.0, Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle),
        (360.0, Joint::RightHip, Joint::RightKnee, Joint::RightAnkle),
    ] {
        let knee_at = (x, 300.0);
        push(&mut points, hip, (x, 200.0), score);
        push(&mut points, knee, knee_at, score);
        push(&mut points, ankle, limb_end(knee_at, 100.0, knee_angle), score);
    }

    Pose::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{angle, find_keypoint, KEYPOINT_MIN_SCORE};

    #[test]
    fn test_fixture_angles_are_exact() {
        for target in [90.0, 120.0, 160.0] {
            let pose = pushup_pose(target, 0.9);
            let s = find_keypoint(&pose, Joint::LeftShoulder, KEYPOINT_MIN_SCORE).unwrap();
            let e = find_keypoint(&pose, Joint::LeftElbow, KEYPOINT_MIN_SCORE).unwrap();
            let w = find_keypoint(&pose, Joint::LeftWrist, KEYPOINT_MIN_SCORE).unwrap();
            assert!((angle(&s, &e, &w) - target).abs() < 1e-3);

            let pose = squat_pose(target, 0.9);
            let h = find_keypoint(&pose, Joint::RightHip, KEYPOINT_MIN_SCORE).unwrap();
            let k = find_keypoint(&pose, Joint::RightKnee, KEYPOINT_MIN_SCORE).unwrap();
            let a = find_keypoint(&pose, Joint::RightAnkle, KEYPOINT_MIN_SCORE).unwrap();
            assert!((angle(&h, &k, &a) - target).abs() < 1e-3);
        }
    }
}
