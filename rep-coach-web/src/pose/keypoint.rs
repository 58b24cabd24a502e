//! Keypoint storage - named joints as reported by the pose model
//!
//! MoveNet (and every COCO-style model) reports the same 17 joints.
//! Coordinates are in frame pixels, score is the model's confidence.

use nalgebra::Point2;

// ============================================================================
// JOINT VOCABULARY (COCO order - 17 total)
// ============================================================================

/// Number of joints in the COCO vocabulary
pub const JOINT_COUNT: usize = 17;

/// A named anatomical landmark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints in model order
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Nose,
        Joint::LeftEye,
        Joint::RightEye,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Position in the model's output array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name used by the pose model (e.g. "left_shoulder")
    pub fn name(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEye => "left_eye",
            Joint::RightEye => "right_eye",
            Joint::LeftEar => "left_ear",
            Joint::RightEar => "right_ear",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }

    /// Look up a joint by its wire name
    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::ALL.iter().copied().find(|joint| joint.name() == name)
    }
}

// ============================================================================
// KEYPOINT / POSE
// ============================================================================

/// A single detected joint for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub joint: Joint,
    pub x: f32,
    pub y: f32,
    /// Detection confidence (0-1)
    pub score: f32,
}

impl Keypoint {
    pub fn new(joint: Joint, x: f32, y: f32, score: f32) -> Self {
        Self { joint, x, y, score }
    }

    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// All keypoints detected for one frame, in model order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub keypoints: Vec<Keypoint>,
}

impl Pose {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    /// Build a pose from raw `(name, x, y, score)` tuples.
    ///
    /// Names outside the joint vocabulary are dropped.
    pub fn from_named<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f32, f32, f32)>,
    {
        let keypoints = raw
            .into_iter()
            .filter_map(|(name, x, y, score)| {
                let joint = Joint::from_name(name);
                if joint.is_none() {
                    log::debug!("Dropping keypoint with unknown name '{}'", name);
                }
                joint.map(|joint| Keypoint::new(joint, x, y, score))
            })
            .collect();
        Self { keypoints }
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// First keypoint for `joint` whose score is strictly above `min_score`
    pub fn keypoint_above(&self, joint: Joint, min_score: f32) -> Option<Keypoint> {
        self.keypoints
            .iter()
            .find(|k| k.joint == joint && k.score > min_score)
            .copied()
    }

    /// Mean score of the keypoints scoring strictly above `min_score`, 0 if none do
    pub fn mean_score_above(&self, min_score: f32) -> f32 {
        let (sum, count) = self
            .keypoints
            .iter()
            .filter(|k| k.score > min_score)
            .fold((0.0f32, 0usize), |(sum, count), k| (sum + k.score, count + 1));

        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }
}
