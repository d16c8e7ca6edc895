// ABOUTME: Colors and text styling for tour screens
// Maps the "fonts and colors" configuration surface onto ratatui styles

use ratatui::style::{Color, Modifier, Style};

use crate::error::FlowError;

// Color palette from TUI style guide
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);

/// Visual configuration for a tour: flat background, text foreground, and
/// the styles applied to titles and subtitles.
///
/// Defaults: a heavy title over a lighter, slightly faded subtitle on a
/// dark background.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub title: Style,
    pub subtitle: Style,
}

impl Theme {
    /// Build a theme from a background and foreground color, deriving the
    /// default title and subtitle styles from the foreground.
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
            title: Style::default().fg(foreground).add_modifier(Modifier::BOLD),
            // Subtitle text sits at ~80% of the foreground
            subtitle: Style::default().fg(shade_toward_black(foreground, 0.2)),
        }
    }

    /// Override the title style (the "primary font").
    pub fn with_title(mut self, style: Style) -> Self {
        self.title = style;
        self
    }

    /// Override the subtitle style (the "secondary font").
    pub fn with_subtitle(mut self, style: Style) -> Self {
        self.subtitle = style;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DARK_BG, SOFT_WHITE)
    }
}

/// Darken a color toward black by `amount` in [0, 1].
///
/// Only RGB colors can be blended; palette-indexed colors are passed
/// through unchanged since their rendered value is terminal-dependent.
pub fn shade_toward_black(color: Color, amount: f64) -> Color {
    let keep = 1.0 - amount.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f64::from(r) * keep).round() as u8,
            (f64::from(g) * keep).round() as u8,
            (f64::from(b) * keep).round() as u8,
        ),
        other => other,
    }
}

/// Parse a color from a tour file: `#rrggbb` hex or a small set of names.
pub fn parse_color(text: &str) -> Result<Color, FlowError> {
    let trimmed = text.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 {
            let parse = |range| u8::from_str_radix(&hex[range], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (parse(0..2), parse(2..4), parse(4..6)) {
                return Ok(Color::Rgb(r, g, b));
            }
        }
        return Err(FlowError::InvalidColor(text.to_string()));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(FlowError::InvalidColor(text.to_string())),
    }
}
