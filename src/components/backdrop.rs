// ABOUTME: Full-bleed darkened backdrop behind tour text
// Terminal analog of a fill-scaled image with a black overlay on top

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::theme::shade_toward_black;

/// Default darkening factor.
pub const DEFAULT_SHADE: f64 = 0.9;

#[derive(Debug, Clone)]
enum BackdropKind {
    /// Solid color fill.
    Fill(Color),
    /// Lines of terminal art tiled across the area.
    Art { lines: Vec<String>, color: Color },
}

/// A decorated background that fills its container, clips overflow, and is
/// darkened toward black so foreground text stays readable on top of it.
///
/// Stateless and side-effect free: rendering writes cells, nothing else.
#[derive(Debug, Clone)]
pub struct Backdrop {
    kind: BackdropKind,
    shade: f64,
}

impl Backdrop {
    /// A solid-color backdrop.
    pub fn fill(color: Color) -> Self {
        Self {
            kind: BackdropKind::Fill(color),
            shade: DEFAULT_SHADE,
        }
    }

    /// An art backdrop: the lines are tiled to cover the whole area and
    /// clipped at its edges.
    pub fn art(lines: Vec<String>, color: Color) -> Self {
        Self {
            kind: BackdropKind::Art { lines, color },
            shade: DEFAULT_SHADE,
        }
    }

    /// Set the darkening factor. Values outside [0, 1] clamp: 0 leaves the
    /// backdrop at full brightness, 1 blacks it out.
    pub fn with_shade(mut self, shade: f64) -> Self {
        self.shade = shade.clamp(0.0, 1.0);
        self
    }

    pub fn shade(&self) -> f64 {
        self.shade
    }
}

impl Widget for &Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match &self.kind {
            BackdropKind::Fill(color) => {
                let shaded = shade_toward_black(*color, self.shade);
                buf.set_style(area, Style::default().bg(shaded));
            }
            BackdropKind::Art { lines, color } => {
                buf.set_style(area, Style::default().bg(Color::Rgb(0, 0, 0)));
                if lines.is_empty() {
                    return;
                }
                let style = Style::default().fg(shade_toward_black(*color, self.shade));
                let width = area.width as usize;
                for row in 0..area.height {
                    let line = &lines[row as usize % lines.len()];
                    let tiled: String = line.chars().cycle().take(width).collect();
                    buf.set_stringn(area.x, area.y + row, &tiled, width, style);
                }
            }
        }
    }
}
