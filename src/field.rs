use rand::Rng;
use tracing::debug;

use crate::error::RenderError;
use crate::geometry::Screen;
use crate::glyph::{Surface, TextMeasure, Tint};
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// What happened to a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Accepted,
    /// Overlaps a word that is still close to the spawn edge
    Collision,
    /// Would hang off the bottom of the playfield
    OutOfBounds,
}

/// Result of moving the whole field forward by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub completed: usize,
    pub reached_edge: bool,
}

/// True when `candidate` would be drawn on top of `existing`.
///
/// Only the candidate's right edge is compared against the existing word's
/// left edge, which is exact for candidates spawned at `x = 0`.
pub fn collides(candidate: &Word, existing: &Word) -> bool {
    candidate.right() > existing.x() as i64
        && candidate.bounds().overlaps_vertically(&existing.bounds())
}

/// The ordered set of words currently on screen
#[derive(Debug, Clone)]
pub struct WordField {
    screen: Screen,
    words: Vec<Word>,
}

impl WordField {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            words: Vec::new(),
        }
    }

    /// Pick a random word and height and try to place it at the left edge.
    /// Rejected candidates are dropped; there is no retry.
    pub fn propose<F, R>(
        &mut self,
        vocabulary: &Vocabulary,
        font: &F,
        rng: &mut R,
    ) -> Result<Option<&Word>, RenderError>
    where
        F: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        let text = vocabulary.choose(rng);
        let max_y = i32::try_from(self.screen.height).unwrap_or(i32::MAX).max(1);
        let y = rng.gen_range(0..max_y);
        let candidate = Word::create(text, y, font, Tint::Base)?;

        match self.try_insert(candidate) {
            Placement::Accepted => Ok(self.words.last()),
            rejected => {
                debug!(word = text, y, placement = ?rejected, "spawn dropped");
                Ok(None)
            }
        }
    }

    pub fn try_insert(&mut self, candidate: Word) -> Placement {
        if self.words.iter().any(|existing| collides(&candidate, existing)) {
            return Placement::Collision;
        }
        if candidate.bottom() > self.screen.height as i64 {
            return Placement::OutOfBounds;
        }
        debug!(word = candidate.text(), y = candidate.y(), "spawned");
        self.words.push(candidate);
        Placement::Accepted
    }

    /// Every live word sees every keystroke.
    pub fn dispatch(&mut self, letter: char) {
        for word in &mut self.words {
            word.advance(letter);
        }
    }

    /// Drop completed words, then draw and move the rest. A word whose right
    /// edge has reached the screen width at the position it was drawn at flags
    /// `reached_edge`.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S, delta: i32) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let width = self.screen.width as i64;

        self.words.retain_mut(|word| {
            if word.is_complete() {
                debug!(word = word.text(), "completed");
                outcome.completed += 1;
                return false;
            }
            word.render(&mut *surface);
            if word.right() >= width {
                outcome.reached_edge = true;
            }
            word.shift_horizontal(delta);
            true
        });

        outcome
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }
}
