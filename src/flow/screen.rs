// ABOUTME: Screen records and tour configuration
// A tour is an ordered list of screens plus a theme, supplied once at construction

use crate::components::Backdrop;
use crate::theme::Theme;

/// One page of a tour. Immutable once constructed; display order follows
/// the order of the configured screen list.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Headline, always shown.
    pub title: String,
    /// Supporting copy. When absent the subtitle element is omitted from
    /// the layout entirely, not rendered as an empty line.
    pub subtitle: Option<String>,
    /// Full-bleed backdrop behind the text. When absent the theme's flat
    /// background color shows instead.
    pub backdrop: Option<Backdrop>,
}

impl Screen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            backdrop: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = Some(backdrop);
        self
    }
}

/// Everything a tour needs besides its completion callback.
#[derive(Debug, Clone, Default)]
pub struct TourConfig {
    pub theme: Theme,
    pub screens: Vec<Screen>,
}

impl TourConfig {
    pub fn new(theme: Theme, screens: Vec<Screen>) -> Self {
        Self { theme, screens }
    }
}
