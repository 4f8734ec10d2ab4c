//! Text measuring and drawing seams.
//!
//! The game never talks to the terminal directly. Words are measured through a
//! [`TextMeasure`] and drawn onto a [`Surface`]; the terminal implementation of
//! the latter lives in `ui::canvas`.

use unicode_width::UnicodeWidthStr;

use crate::error::{InitError, RenderError};
use crate::geometry::{Bounds, Size};

pub const DEFAULT_CELL_WIDTH: u32 = 16;
pub const DEFAULT_CELL_HEIGHT: u32 = 32;

/// Color state of a word as it reacts to keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Tint {
    /// Freshly spawned, nothing typed yet
    #[default]
    Base,
    /// Last keystroke matched
    Progress,
    /// Last keystroke missed and progress was discarded
    Reset,
}

/// Measures the extent text will occupy once drawn
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<Size, RenderError>;
}

/// Receives draw calls for a single frame
pub trait Surface {
    fn draw_text(&mut self, text: &str, bounds: Bounds, tint: Tint);
}

/// Monospaced font on a character grid. Every column a glyph occupies is
/// `cell_width` playfield units wide; every line is `cell_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFont {
    cell_width: u32,
    cell_height: u32,
}

impl CellFont {
    pub fn new(cell_width: u32, cell_height: u32) -> Result<Self, InitError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(InitError::Font(format!(
                "cell size must be non-zero, got {}x{}",
                cell_width, cell_height
            )));
        }
        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }
}

impl Default for CellFont {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl TextMeasure for CellFont {
    fn measure(&self, text: &str) -> Result<Size, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        // zero-width-only text would be invisible and impossible to hit
        let columns = text.width();
        if text.chars().any(char::is_control) || columns == 0 {
            return Err(RenderError::Unprintable {
                text: text.to_string(),
            });
        }
        let width = u32::try_from(columns)
            .ok()
            .and_then(|columns| columns.checked_mul(self.cell_width))
            .ok_or_else(|| RenderError::TooWide {
                text: text.to_string(),
            })?;
        Ok(Size::new(width, self.cell_height))
    }
}

/// Surface that discards everything, for headless ticks
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_text(&mut self, _text: &str, _bounds: Bounds, _tint: Tint) {}
}

/// Surface that remembers every draw call of the frame
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub draws: Vec<(String, Bounds, Tint)>,
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, text: &str, bounds: Bounds, tint: Tint) {
        self.draws.push((text.to_string(), bounds, tint));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn measures_by_display_columns() {
        let font = CellFont::new(10, 20).unwrap();
        assert_eq!(font.measure("cat").unwrap(), Size::new(30, 20));
        // wide glyphs take two columns
        assert_eq!(font.measure("猫").unwrap(), Size::new(20, 20));
    }

    #[test]
    fn empty_text_fails() {
        let font = CellFont::default();
        assert_eq!(font.measure(""), Err(RenderError::EmptyText));
    }

    #[test]
    fn control_characters_fail() {
        let font = CellFont::default();
        assert_matches!(font.measure("a\tb"), Err(RenderError::Unprintable { .. }));
        assert_matches!(
            font.measure("\u{0301}"),
            Err(RenderError::Unprintable { .. })
        );
    }

    #[test]
    fn oversized_cells_fail_instead_of_wrapping() {
        let font = CellFont::new(1 << 31, 32).unwrap();
        assert_eq!(font.measure("a").unwrap(), Size::new(1 << 31, 32));
        assert_matches!(font.measure("ab"), Err(RenderError::TooWide { text }) if text == "ab");
    }

    #[test]
    fn zero_cells_are_rejected() {
        assert_matches!(CellFont::new(0, 32), Err(InitError::Font(_)));
        assert_matches!(CellFont::new(16, 0), Err(InitError::Font(_)));
    }

    #[test]
    fn tint_names() {
        assert_eq!(Tint::Progress.to_string(), "Progress");
    }
}
