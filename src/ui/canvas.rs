use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::geometry::{Bounds, Screen};
use crate::glyph::{Surface, Tint};
use crate::ui::tint_style;

/// Draws playfield text into a ratatui buffer, scaling playfield units onto
/// the cells of `area`.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    screen: Screen,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, screen: Screen) -> Self {
        Self { buf, area, screen }
    }

    /// Terminal cell for a playfield point, if it lands inside `area`.
    pub fn project(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0
            || y < 0
            || self.area.is_empty()
            || self.screen.width == 0
            || self.screen.height == 0
        {
            return None;
        }
        let col = x as u64 * self.area.width as u64 / self.screen.width as u64;
        let row = y as u64 * self.area.height as u64 / self.screen.height as u64;
        if col >= self.area.width as u64 || row >= self.area.height as u64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }
}

impl Surface for BufferSurface<'_> {
    fn draw_text(&mut self, text: &str, bounds: Bounds, tint: Tint) {
        let Some((col, row)) = self.project(bounds.x, bounds.y) else {
            return;
        };
        let room = self.area.right().saturating_sub(col) as usize;
        let style: Style = tint_style(tint);
        self.buf.set_stringn(col, row, text, room, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol())
            .collect::<String>()
    }

    #[test]
    fn projects_proportionally() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        let area = buf.area;
        let surface = BufferSurface::new(&mut buf, area, Screen::default());
        assert_eq!(surface.project(0, 0), Some((0, 0)));
        assert_eq!(surface.project(640, 360), Some((40, 12)));
        assert_eq!(surface.project(1279, 719), Some((79, 23)));
        assert_eq!(surface.project(1280, 0), None);
        assert_eq!(surface.project(-1, 0), None);
    }

    #[test]
    fn honors_area_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let area = Rect::new(5, 2, 20, 5);
        let surface = BufferSurface::new(&mut buf, area, Screen::new(200, 50));
        assert_eq!(surface.project(0, 0), Some((5, 2)));
        assert_eq!(surface.project(100, 25), Some((15, 4)));
    }

    #[test]
    fn draws_tinted_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area, Screen::default());
        let bounds = Bounds {
            x: 160,
            y: 60,
            width: 48,
            height: 32,
        };
        surface.draw_text("cat", bounds, Tint::Reset);
        assert!(row_text(&buf, 2).starts_with("          cat"));
        assert_eq!(buf[(10, 2)].fg, Color::Red);
    }

    #[test]
    fn clips_at_right_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area, Screen::default());
        let bounds = Bounds {
            x: 1248,
            y: 0,
            width: 96,
            height: 32,
        };
        surface.draw_text("kitten", bounds, Tint::Base);
        assert!(row_text(&buf, 0).ends_with("ki"));
    }
}
