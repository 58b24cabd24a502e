//! Browser speech output via `window.speechSynthesis`

use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use crate::voice::SpeechSink;

/// Slightly slower than default for a more natural pace
const UTTERANCE_RATE: f32 = 0.9;

/// Speech sink backed by the Web Speech API.
///
/// Falls silent (but keeps working) when the browser has no speech support.
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|window| window.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speechSynthesis unavailable, voice feedback disabled");
        }
        Self { synth }
    }
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSink for WebSpeech {
    fn speak(&mut self, text: &str, cancel_previous: bool) {
        let Some(synth) = &self.synth else {
            return;
        };

        if cancel_previous {
            synth.cancel();
        }

        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_rate(UTTERANCE_RATE);
                synth.speak(&utterance);
            }
            Err(e) => log::warn!("Could not create utterance: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }
}
