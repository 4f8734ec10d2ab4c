use std::time::{Duration, Instant};

/// Words per minute over `elapsed_ms`, truncated. Zero elapsed time yields 0.
pub fn words_per_minute(completed: u64, elapsed_ms: u64) -> u64 {
    if elapsed_ms == 0 {
        return 0;
    }
    completed * 60_000 / elapsed_ms
}

/// Final numbers shown once a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub completed: u64,
    pub elapsed: Duration,
    pub wpm: u64,
}

impl Summary {
    pub fn new(completed: u64, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_millis().min(u64::MAX as u128) as u64;
        Self {
            completed,
            elapsed,
            wpm: words_per_minute(completed, elapsed_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionMetrics {
    pub started_at: Instant,
    pub ended_at: Option<Instant>,
    pub completed: u64,
}

impl SessionMetrics {
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(started_at: Instant) -> Self {
        Self {
            started_at,
            ended_at: None,
            completed: 0,
        }
    }

    /// Count completions; ignored once the session has ended.
    pub fn record_completed(&mut self, count: usize) {
        if self.is_finished() {
            return;
        }
        self.completed += count as u64;
    }

    pub fn finish(&mut self) {
        self.finish_at(Instant::now());
    }

    /// Freeze the end time. Later calls keep the first one.
    pub fn finish_at(&mut self, ended_at: Instant) {
        if self.ended_at.is_none() {
            self.ended_at = Some(ended_at.max(self.started_at));
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        let end = self.ended_at.unwrap_or_else(Instant::now);
        end.duration_since(self.started_at)
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.completed, self.elapsed())
    }
}
