// ABOUTME: Progress-indicating advance control rendered in the tour footer

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{shade_toward_black, Theme};

/// Width of the progress track in cells.
const TRACK_WIDTH: usize = 10;

/// The "next" control: a progress track with a chevron, drawn right-aligned.
///
/// The track fills with `floor(progress * width)` cells, so it never reads
/// as full while screens remain; it only looks finished once the tour is.
pub struct NextButton {
    progress: f64,
}

impl NextButton {
    pub fn new(progress: f64) -> Self {
        Self { progress }
    }

    /// Number of filled track cells for a given progress and track width.
    pub fn filled_cells(progress: f64, width: usize) -> usize {
        ((progress.clamp(0.0, 1.0) * width as f64).floor() as usize).min(width)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let filled = Self::filled_cells(self.progress, TRACK_WIDTH);
        let track_fg = theme.foreground;
        let track_dim = shade_toward_black(track_fg, 0.6);

        let line = Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(track_fg)),
            Span::styled(
                "░".repeat(TRACK_WIDTH - filled),
                Style::default().fg(track_dim),
            ),
            Span::styled(" ", Style::default()),
            Span::styled(
                "❯",
                Style::default().fg(track_fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default()),
        ]);

        let widget = Paragraph::new(line).alignment(Alignment::Right);
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells_at_start() {
        assert_eq!(NextButton::filled_cells(0.0, 10), 0);
    }

    #[test]
    fn test_filled_cells_rounds_down() {
        assert_eq!(NextButton::filled_cells(0.25, 10), 2);
        assert_eq!(NextButton::filled_cells(0.29, 10), 2);
    }

    #[test]
    fn test_track_never_fills_before_completion() {
        // Last-screen progress is (n-1)/n for every tour length
        for n in 2..50usize {
            let progress = (n - 1) as f64 / n as f64;
            assert!(NextButton::filled_cells(progress, 10) < 10);
        }
    }

    #[test]
    fn test_filled_cells_clamps_progress() {
        assert_eq!(NextButton::filled_cells(1.5, 10), 10);
        assert_eq!(NextButton::filled_cells(-0.5, 10), 0);
    }
}
