pub mod canvas;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::Duration;

use crate::glyph::Tint;
use crate::session::Summary;

const VERTICAL_MARGIN: u16 = 2;

pub fn tint_style(tint: Tint) -> Style {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    match tint {
        Tint::Base => bold_style.add_modifier(Modifier::DIM),
        Tint::Progress => bold_style.fg(Color::Green),
        Tint::Reset => bold_style.fg(Color::Red),
    }
}

/// Split the terminal into the playfield and a one-line status bar below it.
pub fn split_playfield(area: Rect) -> (Rect, Rect) {
    let [field, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    (field, status)
}

/// Running tally under the playfield
pub struct StatusLine {
    pub completed: u64,
    pub elapsed: Duration,
}

impl Widget for StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(format!("{} words", self.completed), dim_style),
            Span::styled("   ", dim_style),
            Span::styled(format!("{:.1}s", self.elapsed.as_secs_f64()), dim_style),
            Span::styled("   (esc)ape", dim_style.add_modifier(Modifier::ITALIC)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// End-of-session results
pub struct SummaryView {
    pub summary: Summary,
}

impl Widget for &SummaryView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let magenta_style = Style::default().patch(bold_style).fg(Color::Magenta);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let [_, wpm, detail, _, legend, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .vertical_margin(VERTICAL_MARGIN)
        .areas(area);

        Paragraph::new(Span::styled(
            format!("{} wpm", self.summary.wpm),
            magenta_style,
        ))
        .alignment(Alignment::Center)
        .render(wpm, buf);

        Paragraph::new(Span::styled(
            format!(
                "{} words in {:.1}s",
                self.summary.completed,
                self.summary.elapsed.as_secs_f64()
            ),
            bold_style,
        ))
        .alignment(Alignment::Center)
        .render(detail, buf);

        Paragraph::new(Span::styled("press any key to exit", italic_style))
            .alignment(Alignment::Center)
            .render(legend, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn summary_shows_wpm_and_count() {
        let view = SummaryView {
            summary: Summary::new(12, Duration::from_secs(30)),
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);

        (&view).render(area, &mut buffer);

        let text = rendered(&buffer);
        assert!(text.contains("24 wpm"));
        assert!(text.contains("12 words in 30.0s"));
        assert!(text.contains("press any key to exit"));
    }

    #[test]
    fn summary_fits_tiny_area() {
        let view = SummaryView {
            summary: Summary::new(0, Duration::ZERO),
        };
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);

        (&view).render(area, &mut buffer);

        assert!(*buffer.area() == area);
    }

    #[test]
    fn status_line_reports_progress() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        StatusLine {
            completed: 3,
            elapsed: Duration::from_millis(4_250),
        }
        .render(area, &mut buffer);
        let text = rendered(&buffer);
        assert!(text.contains("3 words"));
        assert!(text.contains("4.2s") || text.contains("4.3s"));
    }

    #[test]
    fn playfield_leaves_room_for_status() {
        let (field, status) = split_playfield(Rect::new(0, 0, 80, 24));
        assert_eq!(field, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn tints_map_to_colors() {
        assert_eq!(tint_style(Tint::Progress).fg, Some(Color::Green));
        assert_eq!(tint_style(Tint::Reset).fg, Some(Color::Red));
        assert!(tint_style(Tint::Base)
            .add_modifier
            .contains(Modifier::DIM));
    }
}
