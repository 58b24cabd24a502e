//! Errors surfaced to JavaScript

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::error::{ConfigError, UnknownExercise};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("config could not be read: {0}")]
    MalformedConfig(String),

    #[error(transparent)]
    UnknownExercise(#[from] UnknownExercise),

    #[error("pose could not be read: {0}")]
    MalformedPose(String),

    #[error("result could not be converted: {0}")]
    Serialize(String),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BridgeError::from(ConfigError::EmptyHistory);
        assert_eq!(err.to_string(), "invalid config: smoothing history must hold at least one frame");

        let err = BridgeError::from(UnknownExercise("Burpees".into()));
        assert_eq!(err.to_string(), "unknown exercise 'Burpees' (expected Pushups or Squats)");
    }
}
