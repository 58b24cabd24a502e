//! `RepCoach` - the JavaScript-facing workout session
//!
//! ```javascript
//! const coach = new RepCoach({ speech_interval_ms: 3000 });
//! coach.setExercise('Squats');
//! coach.start();
//! async function loop() {
//!     const poses = await detector.estimatePoses(video);
//!     const report = coach.processFrame(poses[0] ?? null);
//!     if (report?.feedback_changed) showFeedback(report.result.feedback);
//!     requestAnimationFrame(loop);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::error::BridgeError;
use super::landmarks::pose_from_js;
use super::speech::WebSpeech;
use crate::config::CoachConfig;
use crate::exercise::Exercise;
use crate::session::Session;

#[wasm_bindgen]
pub struct RepCoach {
    session: Session,
    speech: WebSpeech,
}

#[wasm_bindgen]
impl RepCoach {
    /// Create a coach. `config` may be omitted or a partial config object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RepCoach, JsValue> {
        let config = config_from_js(config)?;
        let session = Session::new(config).map_err(BridgeError::from)?;
        log::info!("RepCoach ready");

        Ok(Self {
            session,
            speech: WebSpeech::new(),
        })
    }

    /// Switch to "Pushups" or "Squats" (stops a running session)
    #[wasm_bindgen(js_name = setExercise)]
    pub fn set_exercise(&mut self, name: &str) -> Result<(), JsValue> {
        let exercise: Exercise = name.parse().map_err(BridgeError::from)?;
        self.session.select_exercise(exercise, &mut self.speech);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn exercise(&self) -> String {
        self.session.exercise().label().to_string()
    }

    /// Start counting. `now` defaults to `Date.now()`.
    pub fn start(&mut self, now: Option<f64>) {
        self.session.start(now.unwrap_or_else(js_sys::Date::now));
    }

    /// Stop counting, silence speech and reset all counters
    pub fn stop(&mut self) {
        self.session.stop(&mut self.speech);
    }

    /// Zero the counters; a running workout's clock restarts from `now`
    pub fn reset(&mut self, now: Option<f64>) {
        self.session.reset(now.unwrap_or_else(js_sys::Date::now));
    }

    /// Feed one frame's pose (or `null` when nobody is detected).
    ///
    /// Returns the frame report, or `null` when the frame was skipped.
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, pose: JsValue, now: Option<f64>) -> Result<JsValue, JsValue> {
        let pose = pose_from_js(pose)?;
        let now = now.unwrap_or_else(js_sys::Date::now);

        match self.session.advance(pose.as_ref(), now, &mut self.speech) {
            Some(report) => report
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| BridgeError::Serialize(e.to_string()).into()),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.session.status().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn reps(&self) -> u32 {
        self.session.display_reps()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Workout time as `MM:SS`
    #[wasm_bindgen(js_name = elapsedLabel)]
    pub fn elapsed_label(&self, now: Option<f64>) -> String {
        self.session.elapsed_label(now.unwrap_or_else(js_sys::Date::now))
    }
}

fn config_from_js(value: JsValue) -> Result<CoachConfig, BridgeError> {
    if value.is_null() || value.is_undefined() {
        return Ok(CoachConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::MalformedConfig(e.to_string()))
}
