//! Voice coordinator - decides when feedback is worth saying out loud
//!
//! Runs once per analysed frame. Milestones win over form corrections, an
//! identical correction is not repeated while it persists, and nothing is
//! spoken within the minimum interval of the previous utterance.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::milestone;
use super::sink::SpeechSink;
use crate::config::SPEECH_INTERVAL_MS;
use crate::exercise::AnalysisResult;

pub struct VoiceCoordinator {
    /// Minimum gap between utterances
    interval_ms: f64,

    /// Wall-clock time of the last utterance (ms)
    last_spoken_at: Option<f64>,

    /// Correction most recently adopted, cleared once the form is good again
    last_correction: Option<String>,

    /// Rep count at which milestones were last checked
    last_milestone_reps: u32,

    rng: StdRng,
}

impl VoiceCoordinator {
    pub fn new(interval_ms: f64) -> Self {
        Self::with_rng(interval_ms, StdRng::from_entropy())
    }

    /// Coordinator with a fixed random source (for reproducible cheers)
    pub fn with_rng(interval_ms: f64, rng: StdRng) -> Self {
        Self {
            interval_ms,
            last_spoken_at: None,
            last_correction: None,
            last_milestone_reps: 0,
            rng,
        }
    }

    /// Consider one frame's result at `now_ms` and speak through `sink` if due.
    ///
    /// Returns the utterance actually dispatched.
    pub fn observe(
        &mut self,
        result: &AnalysisResult,
        now_ms: f64,
        sink: &mut dyn SpeechSink,
    ) -> Option<String> {
        let mut candidate = None;

        if result.reps > self.last_milestone_reps {
            if let Some(reached) = milestone::crossed(self.last_milestone_reps, result.reps) {
                candidate = Some(milestone::announcement(reached, &mut self.rng));
            }
            self.last_milestone_reps = result.reps;
        }

        match &result.voice_feedback {
            Some(correction) if candidate.is_none() => {
                if self.last_correction.as_ref() != Some(correction) {
                    candidate = Some(correction.clone());
                    self.last_correction = Some(correction.clone());
                }
            }
            Some(_) => {}
            // Form is fine again: the same correction may fire later
            None => self.last_correction = None,
        }

        let text = candidate?;
        if !self.is_due(now_ms) {
            log::debug!("Holding back '{}' (spoke too recently)", text);
            return None;
        }

        log::info!("Speaking: {}", text);
        sink.speak(&text, true);
        self.last_spoken_at = Some(now_ms);
        Some(text)
    }

    /// Silence whatever is playing
    pub fn cancel(&self, sink: &mut dyn SpeechSink) {
        sink.cancel();
    }

    /// Forget everything (new exercise or new run)
    pub fn reset(&mut self) {
        self.last_spoken_at = None;
        self.last_correction = None;
        self.last_milestone_reps = 0;
    }

    pub fn last_spoken_at(&self) -> Option<f64> {
        self.last_spoken_at
    }

    pub fn last_milestone_reps(&self) -> u32 {
        self.last_milestone_reps
    }

    fn is_due(&self, now_ms: f64) -> bool {
        match self.last_spoken_at {
            Some(last) => now_ms - last >= self.interval_ms,
            None => true,
        }
    }
}

impl Default for VoiceCoordinator {
    fn default() -> Self {
        Self::new(SPEECH_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::Stage;
    use crate::voice::RecordingSink;
    use pretty_assertions::assert_eq;

    fn coordinator() -> VoiceCoordinator {
        VoiceCoordinator::with_rng(SPEECH_INTERVAL_MS, StdRng::seed_from_u64(42))
    }

    fn frame(reps: u32, voice: Option<&str>) -> AnalysisResult {
        let result = AnalysisResult::new(reps, "", Stage::Up);
        match voice {
            Some(text) => result.with_voice(text),
            None => result,
        }
    }

    #[test]
    fn test_milestones_at_5_10_15() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();
        let mut now = 0.0;

        for reps in 1..=15 {
            now += 10_000.0;
            voice.observe(&frame(reps, None), now, &mut sink);
        }

        assert_eq!(sink.spoken.len(), 3);
        assert_eq!(sink.spoken[0], "Great, you've reached 5 reps!");
        assert!(sink.spoken[1].ends_with("You've reached 10 reps!"));
        assert!(!sink.spoken[1].starts_with("Great,"));
        assert_eq!(sink.spoken[2], "Great, you've reached 15 reps!");
    }

    #[test]
    fn test_milestone_beats_correction() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();

        voice.observe(&frame(4, None), 0.0, &mut sink);
        let said = voice.observe(&frame(5, Some("Go a little deeper.")), 10_000.0, &mut sink);
        assert_eq!(said.as_deref(), Some("Great, you've reached 5 reps!"));

        // The correction was never adopted, so it can still be spoken
        let said = voice.observe(&frame(5, Some("Go a little deeper.")), 20_000.0, &mut sink);
        assert_eq!(said.as_deref(), Some("Go a little deeper."));
    }

    #[test]
    fn test_same_correction_not_repeated() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();

        for i in 0..10 {
            voice.observe(&frame(0, Some("Go a little deeper.")), i as f64 * 5_000.0, &mut sink);
        }
        assert_eq!(sink.spoken, vec!["Go a little deeper.".to_string()]);

        // Good form clears the memory and the correction can fire again
        voice.observe(&frame(0, None), 60_000.0, &mut sink);
        voice.observe(&frame(0, Some("Go a little deeper.")), 70_000.0, &mut sink);
        assert_eq!(sink.spoken.len(), 2);
    }

    #[test]
    fn test_minimum_interval() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();

        voice.observe(&frame(0, Some("Try for a full range of motion.")), 1_000.0, &mut sink);
        let held = voice.observe(&frame(0, Some("Get into pushup position")), 2_000.0, &mut sink);
        assert_eq!(held, None);

        let mut now = 2_000.0;
        while now + 33.0 < 3_500.0 {
            now += 33.0;
            voice.observe(&frame(0, None), now, &mut sink);
            voice.observe(&frame(0, Some("Go a little deeper.")), now, &mut sink);
        }
        assert_eq!(sink.spoken.len(), 1);

        let said = voice.observe(&frame(0, Some("Stand straight to begin")), 3_500.0, &mut sink);
        assert_eq!(said.as_deref(), Some("Stand straight to begin"));
        assert_eq!(voice.last_spoken_at(), Some(3_500.0));
    }

    #[test]
    fn test_interval_never_violated() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();
        let mut spoken_at = Vec::new();

        for i in 0..600u32 {
            let now = i as f64 * 33.0;
            let voice_text = if i % 2 == 0 { Some("a") } else { Some("b") };
            if voice.observe(&frame(i / 20, voice_text), now, &mut sink).is_some() {
                spoken_at.push(now);
            }
        }

        assert!(spoken_at.len() > 1);
        for pair in spoken_at.windows(2) {
            assert!(pair[1] - pair[0] >= SPEECH_INTERVAL_MS);
        }
    }

    #[test]
    fn test_speak_cancels_previous() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();
        voice.observe(&frame(0, Some("a")), 0.0, &mut sink);
        assert_eq!(sink.cancels, 1);

        voice.cancel(&mut sink);
        assert_eq!(sink.cancels, 2);
    }

    #[test]
    fn test_reset_clears_memory() {
        let mut voice = coordinator();
        let mut sink = RecordingSink::new();

        voice.observe(&frame(5, Some("a")), 0.0, &mut sink);
        assert_eq!(voice.last_milestone_reps(), 5);

        voice.reset();
        assert_eq!(voice.last_milestone_reps(), 0);
        assert_eq!(voice.last_spoken_at(), None);

        // Fresh run: reaching 5 again is announced, straight away
        let said = voice.observe(&frame(5, None), 100.0, &mut sink);
        assert_eq!(said.as_deref(), Some("Great, you've reached 5 reps!"));
    }
}
