//! Speech output seam
//!
//! The coach only decides when and what to say. Whatever actually speaks
//! (the browser's speechSynthesis, a test recorder) sits behind this trait.

/// Something that can speak short phrases
pub trait SpeechSink {
    /// Queue `text`, first cutting off anything still playing if asked to
    fn speak(&mut self, text: &str, cancel_previous: bool);

    /// Stop any utterance in flight
    fn cancel(&mut self);
}

/// Sink that records utterances instead of speaking them
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub spoken: Vec<String>,
    pub cancels: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpeechSink for RecordingSink {
    fn speak(&mut self, text: &str, cancel_previous: bool) {
        if cancel_previous {
            self.cancels += 1;
        }
        self.spoken.push(text.to_string());
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}
