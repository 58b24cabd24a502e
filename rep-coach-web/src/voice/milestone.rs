//! Rep milestones - every 5th rep gets a callout, every 10th a cheer

use rand::seq::SliceRandom;
use rand::Rng;

/// Cheers picked at random for multiples of 10
pub const MOTIVATIONAL_PHRASES: [&str; 3] = [
    "Keep up the great work!",
    "You're doing great, push through!",
    "Amazing effort!",
];

/// Highest milestone (multiple of 5) in `(previous, current]`
///
/// Reps normally advance one at a time, but a jump of several reps in one
/// frame still announces the milestone it skipped over.
pub fn crossed(previous: u32, current: u32) -> Option<u32> {
    if current <= previous {
        return None;
    }
    let milestone = current - current % 5;
    (milestone > previous && milestone > 0).then_some(milestone)
}

/// Spoken phrase for reaching `reps`
pub fn announcement<R: Rng + ?Sized>(reps: u32, rng: &mut R) -> String {
    if reps % 10 == 0 {
        let cheer = MOTIVATIONAL_PHRASES
            .choose(rng)
            .copied()
            .unwrap_or(MOTIVATIONAL_PHRASES[0]);
        format!("{} You've reached {} reps!", cheer, reps)
    } else {
        format!("Great, you've reached {} reps!", reps)
    }
}
