//! Elapsed workout time
//!
//! The host supplies wall-clock milliseconds; no timer runs in here.

/// Tracks when the current run started
#[derive(Clone, Copy, Debug, Default)]
pub struct ElapsedClock {
    started_at: Option<f64>,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64) {
        self.started_at = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whole seconds since start, 0 when stopped
    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        match self.started_at {
            Some(start) if now_ms > start => ((now_ms - start) / 1000.0).floor() as u64,
            _ => 0,
        }
    }
}

/// Format seconds as `MM:SS`
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
