use crate::error::RenderError;
use crate::geometry::Bounds;
use crate::glyph::{Surface, TextMeasure, Tint};

/// A typing target drifting across the playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    matched: usize,
    tint: Tint,
}

impl Word {
    /// Measure `text` under `font` and place it at the left edge.
    pub fn create<F: TextMeasure + ?Sized>(
        text: impl Into<String>,
        y: i32,
        font: &F,
        tint: Tint,
    ) -> Result<Self, RenderError> {
        let text = text.into();
        let size = font.measure(&text)?;
        Ok(Self {
            chars: text.chars().collect(),
            text,
            x: 0,
            y,
            width: size.width,
            height: size.height,
            matched: 0,
            tint,
        })
    }

    /// Feed one typed letter. A match moves progress forward, anything else
    /// throws all progress away.
    pub fn advance(&mut self, letter: char) {
        if self.is_complete() {
            return;
        }
        if self.chars[self.matched] == letter {
            self.matched += 1;
            self.tint = Tint::Progress;
        } else {
            self.matched = 0;
            self.tint = Tint::Reset;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched >= self.chars.len()
    }

    pub fn shift_horizontal(&mut self, delta: i32) {
        self.x = self.x.saturating_add(delta);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_text(&self.text, self.bounds(), self.tint);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn right(&self) -> i64 {
        self.bounds().right()
    }

    pub fn bottom(&self) -> i64 {
        self.bounds().bottom()
    }

    /// Number of leading characters typed correctly so far
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{CellFont, RecordingSurface};
    use crate::geometry::Size;

    /// Font reporting a fixed box regardless of the text
    struct FixedFont(Size);

    impl TextMeasure for FixedFont {
        fn measure(&self, text: &str) -> Result<Size, RenderError> {
            if text.is_empty() {
                return Err(RenderError::EmptyText);
            }
            Ok(self.0)
        }
    }

    fn word(text: &str) -> Word {
        Word::create(text, 100, &FixedFont(Size::new(40, 20)), Tint::Base).unwrap()
    }

    #[test]
    fn create_starts_at_left_edge() {
        let w = word("cat");
        assert_eq!(w.x(), 0);
        assert_eq!(w.y(), 100);
        assert_eq!((w.width(), w.height()), (40, 20));
        assert_eq!(w.matched(), 0);
        assert_eq!(w.tint(), Tint::Base);
        assert!(!w.is_complete());
    }

    #[test]
    fn create_propagates_measure_failure() {
        let font = CellFont::default();
        assert_eq!(
            Word::create("", 0, &font, Tint::Base),
            Err(RenderError::EmptyText)
        );
    }

    #[test]
    fn correct_letters_advance_one_at_a_time() {
        let mut w = word("cat");
        for (i, c) in "cat".chars().enumerate() {
            w.advance(c);
            assert_eq!(w.matched(), i + 1);
            assert_eq!(w.tint(), Tint::Progress);
        }
        assert!(w.is_complete());
    }

    #[test]
    fn progress_never_exceeds_length() {
        let mut w = word("at");
        for c in "atat".chars() {
            w.advance(c);
            assert!(w.matched() <= 2);
        }
        assert!(w.is_complete());
    }

    #[test]
    fn wrong_letter_discards_progress() {
        let mut w = word("dog");
        w.advance('d');
        w.advance('o');
        assert_eq!(w.matched(), 2);
        w.advance('x');
        assert_eq!(w.matched(), 0);
        assert_eq!(w.tint(), Tint::Reset);
        w.advance('d');
        assert_eq!(w.matched(), 1);
        assert_eq!(w.tint(), Tint::Progress);
    }

    #[test]
    fn wrong_first_letter_stays_at_zero() {
        let mut w = word("dog");
        w.advance('g');
        assert_eq!(w.matched(), 0);
        assert_eq!(w.tint(), Tint::Reset);
    }

    #[test]
    fn shift_moves_only_horizontally() {
        let mut w = word("cat");
        w.shift_horizontal(5);
        w.shift_horizontal(7);
        assert_eq!(w.x(), 12);
        w.shift_horizontal(-20);
        assert_eq!(w.x(), -8);
        assert_eq!(w.y(), 100);
        assert_eq!(w.right(), 32);
    }

    #[test]
    fn render_submits_current_state() {
        let mut w = word("cat");
        w.shift_horizontal(3);
        w.advance('c');
        let mut surface = RecordingSurface::default();
        w.render(&mut surface);
        assert_eq!(surface.draws.len(), 1);
        let (text, bounds, tint) = &surface.draws[0];
        assert_eq!(text, "cat");
        assert_eq!(*bounds, w.bounds());
        assert_eq!(*tint, Tint::Progress);
    }
}
