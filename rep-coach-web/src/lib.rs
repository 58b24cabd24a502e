//! Rep Coach Web - pose-driven rep counter and voice coach
//!
//! The browser runs the camera and the pose model and hands one pose per
//! frame to [`RepCoach`]. This crate smooths the joints, counts pushups or
//! squats behind a readiness latch, and decides when feedback is spoken.
//!
//! Everything except the `bridge` module is plain Rust and runs natively.

pub mod config;
pub mod counter;
pub mod error;
pub mod exercise;
pub mod pose;
pub mod session;
pub mod voice;
pub mod bridge;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

pub use bridge::RepCoach;
pub use config::{CoachConfig, Thresholds};
pub use exercise::{AnalysisResult, Exercise, ExerciseAnalyzer};
pub use session::{FrameReport, Session};
pub use voice::{SpeechSink, VoiceCoordinator};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// `level` is one of "trace", "debug", "info", "warn", "error".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("Rep coach logging at {}", log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
