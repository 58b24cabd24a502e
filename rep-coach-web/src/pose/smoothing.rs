//! Rolling pose history for temporal smoothing
//!
//! Raw per-frame joints jitter enough to push an angle back and forth across
//! a threshold. Averaging the last few frames costs a little latency and
//! keeps transitions stable.

use std::collections::VecDeque;

use super::keypoint::{Joint, Keypoint, Pose, JOINT_COUNT};

/// Number of frames in the smoothing window
pub const HISTORY_SIZE: usize = 8;

#[derive(Clone, Copy, Default)]
struct Accumulator {
    x: f32,
    y: f32,
    score: f32,
    samples: u32,
}

/// Rolling buffer that keeps the last N raw poses in chronological order
#[derive(Clone, Debug)]
pub struct KeypointSmoother {
    history: VecDeque<Pose>,
    capacity: usize,
}

impl KeypointSmoother {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_SIZE)
    }

    /// Smoother with a custom window. A zero window is treated as one frame.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a new raw pose, evicting the oldest once the window is full
    pub fn push(&mut self, pose: Pose) {
        self.history.push_back(pose);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    /// Per-joint mean over the buffered frames.
    ///
    /// A joint missing from a frame simply contributes nothing for that
    /// frame. Joints are ordered by first appearance in the window.
    pub fn smoothed(&self) -> Pose {
        let mut sums = [Accumulator::default(); JOINT_COUNT];
        let mut order: Vec<Joint> = Vec::with_capacity(JOINT_COUNT);

        for frame in &self.history {
            for k in &frame.keypoints {
                let acc = &mut sums[k.joint.index()];
                if acc.samples == 0 {
                    order.push(k.joint);
                }
                acc.x += k.x;
                acc.y += k.y;
                acc.score += k.score;
                acc.samples += 1;
            }
        }

        let keypoints = order
            .into_iter()
            .map(|joint| {
                let acc = sums[joint.index()];
                let n = acc.samples as f32;
                Keypoint::new(joint, acc.x / n, acc.y / n, acc.score / n)
            })
            .collect();

        Pose::new(keypoints)
    }

    /// Frames currently buffered
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all buffered frames (on reset)
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for KeypointSmoother {
    fn default() -> Self {
        Self::new()
    }
}
