use rand::Rng;
use tracing::{debug, info};

use crate::cadence::SpawnCadence;
use crate::error::RenderError;
use crate::field::WordField;
use crate::geometry::Screen;
use crate::glyph::{Surface, TextMeasure};
use crate::session::{SessionMetrics, Summary};
use crate::vocabulary::Vocabulary;

/// Playfield units every live word moves per tick
pub const TICK_STEP: i32 = 2;
/// Minimum wall-clock gap between two ticks
pub const TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    Running,
    Terminated,
}

/// One play session. Owns every resource the words need and lends them out
/// per tick.
#[derive(Debug)]
pub struct Game<F, R> {
    field: WordField,
    vocabulary: Vocabulary,
    font: F,
    rng: R,
    cadence: SpawnCadence,
    metrics: SessionMetrics,
    state: GameState,
}

impl<F: TextMeasure, R: Rng> Game<F, R> {
    /// Start a session now. The vocabulary is expected to have passed
    /// `Vocabulary::check_renderable` for `font` and `screen`.
    pub fn new(screen: Screen, vocabulary: Vocabulary, font: F, rng: R) -> Self {
        Self {
            field: WordField::new(screen),
            vocabulary,
            font,
            rng,
            cadence: SpawnCadence::default(),
            metrics: SessionMetrics::start(),
            state: GameState::Running,
        }
    }

    pub fn with_cadence(mut self, cadence: SpawnCadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_metrics(mut self, metrics: SessionMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Run one frame: maybe spawn, apply the polled letter to every word,
    /// then sweep, draw and move the field.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        input: Option<char>,
        surface: &mut S,
    ) -> Result<GameState, RenderError> {
        if self.state == GameState::Terminated {
            return Ok(self.state);
        }

        if self.cadence.tick() {
            self.field
                .propose(&self.vocabulary, &self.font, &mut self.rng)?;
        }

        if let Some(letter) = input {
            self.field.dispatch(letter);
        }

        let outcome = self.field.step(surface, TICK_STEP);
        if outcome.completed > 0 {
            self.metrics.record_completed(outcome.completed);
            debug!(total = self.metrics.completed, "words completed");
        }

        if outcome.reached_edge {
            info!("a word reached the right edge");
            self.terminate();
        }

        Ok(self.state)
    }

    /// End the session early, e.g. on Esc.
    pub fn interrupt(&mut self) {
        if self.state == GameState::Running {
            info!("session interrupted");
            self.terminate();
        }
    }

    fn terminate(&mut self) {
        self.metrics.finish();
        self.field.clear();
        self.state = GameState::Terminated;
        let summary = self.metrics.summary();
        info!(
            completed = summary.completed,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            wpm = summary.wpm,
            "session over"
        );
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn field(&self) -> &WordField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut WordField {
        &mut self.field
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    pub fn summary(&self) -> Summary {
        self.metrics.summary()
    }

    pub fn screen(&self) -> Screen {
        self.field.screen()
    }
}
