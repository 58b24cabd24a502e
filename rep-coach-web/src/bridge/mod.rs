//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] classes live here.
//! Re-exports only in mod.rs, logic in submodules.

mod coach;
mod error;
mod landmarks;
mod speech;

pub use coach::RepCoach;
pub use error::BridgeError;
pub use landmarks::{pose_from_js, WireKeypoint, WirePose};
pub use speech::WebSpeech;
