// ABOUTME: Renders the current tour screen: backdrop, title, subtitle, next button

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use super::next_button::NextButton;
use crate::flow::{FlowState, Screen};
use crate::theme::Theme;

/// Ticks a freshly started fade lasts.
const FADE_TICKS: u8 = 3;

/// Text transition replayed on every screen change.
///
/// Keyed by screen index rather than text content, so moving between two
/// screens with identical titles still restarts the fade. While active the
/// text renders dimmed and decays back to full brightness over ticks.
#[derive(Debug, Clone)]
pub struct FadeTransition {
    key: usize,
    ticks_left: u8,
}

impl FadeTransition {
    pub fn new() -> Self {
        Self {
            key: 0,
            ticks_left: 0,
        }
    }

    /// Restart the fade for the screen at `key`.
    pub fn restart(&mut self, key: usize) {
        self.key = key;
        self.ticks_left = FADE_TICKS;
    }

    /// Decay one tick of the fade.
    pub fn tick(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    fn apply(&self, style: Style) -> Style {
        if self.is_active() {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless renderer for the tour. All state lives in `FlowState` and the
/// transition; this component only draws.
pub struct FlowView;

impl FlowView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        screens: &[Screen],
        state: &FlowState,
        transition: &FadeTransition,
    ) {
        frame.render_widget(Clear, area);

        // Flat background color, always painted first
        let container = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(container, area);

        let screen = &screens[state.current_index()];

        // Screen backdrop renders full-bleed behind the text
        if let Some(backdrop) = &screen.backdrop {
            frame.render_widget(backdrop, area);
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Title and subtitle
                Constraint::Length(1), // Next button row
                Constraint::Length(1), // Bottom padding
            ])
            .split(area);

        self.render_text(frame, layout[0], theme, screen, transition);

        let button_area = layout[1].inner(&ratatui::layout::Margin {
            horizontal: 2,
            vertical: 0,
        });
        NextButton::new(state.progress()).render(frame, button_area, theme);
    }

    fn render_text(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        screen: &Screen,
        transition: &FadeTransition,
    ) {
        let mut constraints = vec![
            Constraint::Length(1), // Top padding
            Constraint::Length(4), // Title
        ];
        if screen.subtitle.is_some() {
            constraints.push(Constraint::Length(1)); // Spacer
            constraints.push(Constraint::Min(0)); // Subtitle
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new(screen.title.as_str())
            .style(transition.apply(theme.title))
            .wrap(Wrap { trim: false });
        frame.render_widget(title, layout[1]);

        // A screen without a subtitle gets no subtitle element at all
        if let Some(subtitle) = &screen.subtitle {
            let subtitle = Paragraph::new(subtitle.as_str())
                .style(transition.apply(theme.subtitle))
                .wrap(Wrap { trim: false });
            frame.render_widget(subtitle, layout[3]);
        }
    }
}

impl Default for FlowView {
    fn default() -> Self {
        Self::new()
    }
}
