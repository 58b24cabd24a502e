//! Pose input from JavaScript
//!
//! Accepts what TF.js pose-detection hands back for a single person: either
//! the pose object (`{ keypoints: [...] }`) or its bare keypoint array.
//! Each keypoint is `{ name, x, y, score }` in frame pixels.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use super::error::BridgeError;
use crate::pose::Pose;

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WireKeypoint {
    #[serde(default)]
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub score: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WirePose {
    Wrapped { keypoints: Vec<WireKeypoint> },
    Bare(Vec<WireKeypoint>),
}

impl WirePose {
    /// Convert to a pose. Unnamed or unknown keypoints are dropped,
    /// a missing score counts as zero confidence.
    pub fn into_pose(self) -> Pose {
        let keypoints = match self {
            WirePose::Wrapped { keypoints } => keypoints,
            WirePose::Bare(keypoints) => keypoints,
        };

        Pose::from_named(keypoints.iter().filter_map(|k| {
            k.name
                .as_deref()
                .map(|name| (name, k.x, k.y, k.score.unwrap_or(0.0)))
        }))
    }
}

// ============================================================================
// JS CONVERSION
// ============================================================================

/// `null`/`undefined` means nobody was detected this frame
pub fn pose_from_js(value: JsValue) -> Result<Option<Pose>, BridgeError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    let wire: WirePose = serde_wasm_bindgen::from_value(value)
        .map_err(|e| BridgeError::MalformedPose(e.to_string()))?;
    Ok(Some(wire.into_pose()))
}
