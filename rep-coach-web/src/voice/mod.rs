//! Voice module - milestone callouts and spoken form corrections
//!
//! Re-exports only. All logic in submodules.

mod sink;
mod milestone;
mod coordinator;

pub use sink::{RecordingSink, SpeechSink};
pub use milestone::{announcement, crossed, MOTIVATIONAL_PHRASES};
pub use coordinator::VoiceCoordinator;
