// ABOUTME: Tour definitions loaded from TOML files
// Lets the demo binary (and embedding apps) describe a tour without code

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::components::backdrop::{Backdrop, DEFAULT_SHADE};
use crate::flow::{Screen, TourConfig};
use crate::theme::{parse_color, Theme};

/// On-disk shape of a tour file.
#[derive(Debug, Clone, Deserialize)]
pub struct TourFile {
    /// Flat background color, hex or named.
    #[serde(default = "default_background")]
    pub background: String,

    /// Text foreground color, hex or named.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Screens in display order.
    pub screens: Vec<ScreenEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub backdrop: Option<BackdropEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackdropEntry {
    /// Lines of terminal art. Empty means a solid fill of `color`.
    #[serde(default)]
    pub art: Vec<String>,

    /// Art (or fill) color, hex or named.
    #[serde(default = "default_foreground")]
    pub color: String,

    /// Darkening factor in [0, 1]; out-of-range values clamp.
    #[serde(default = "default_shade")]
    pub shade: f64,
}

fn default_background() -> String {
    "#191923".to_string()
}

fn default_foreground() -> String {
    "#dcdce6".to_string()
}

const fn default_shade() -> f64 {
    DEFAULT_SHADE
}

impl TourFile {
    /// Resolve color strings and build the runtime configuration.
    pub fn into_config(self) -> Result<TourConfig> {
        let background = parse_color(&self.background)
            .with_context(|| format!("invalid background color `{}`", self.background))?;
        let foreground = parse_color(&self.foreground)
            .with_context(|| format!("invalid foreground color `{}`", self.foreground))?;

        let screens = self
            .screens
            .into_iter()
            .map(|entry| {
                let mut screen = Screen::new(entry.title);
                if let Some(subtitle) = entry.subtitle {
                    screen = screen.with_subtitle(subtitle);
                }
                if let Some(backdrop) = entry.backdrop {
                    let color = parse_color(&backdrop.color)
                        .with_context(|| format!("invalid backdrop color `{}`", backdrop.color))?;
                    let widget = if backdrop.art.is_empty() {
                        Backdrop::fill(color)
                    } else {
                        Backdrop::art(backdrop.art, color)
                    };
                    screen = screen.with_backdrop(widget.with_shade(backdrop.shade));
                }
                Ok(screen)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TourConfig::new(Theme::new(background, foreground), screens))
    }
}

/// Load and resolve a tour file.
pub fn load_tour(path: &Path) -> Result<TourConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read tour file {}", path.display()))?;
    let file: TourFile = toml::from_str(&raw)
        .with_context(|| format!("failed to parse tour file {}", path.display()))?;
    file.into_config()
}
