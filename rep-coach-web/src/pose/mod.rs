//! Pose module - keypoints, smoothing and joint geometry
//!
//! Re-exports only. All logic in submodules.

mod keypoint;
mod smoothing;
mod geometry;

pub use keypoint::{Joint, Keypoint, Pose, JOINT_COUNT};
pub use smoothing::{KeypointSmoother, HISTORY_SIZE};
pub use geometry::{
    angle, average_confidence, find_keypoint, torso_tilt, KEYPOINT_MIN_SCORE, MIN_CONFIDENCE,
};
