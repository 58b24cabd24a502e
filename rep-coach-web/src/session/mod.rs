//! Session module - workout lifecycle around the analyzers
//!
//! Re-exports only. All logic in submodules.

mod clock;
mod workout;

pub use clock::{format_elapsed, ElapsedClock};
pub use workout::{FrameReport, Session, STATUS_STARTED, STATUS_STOPPED};
