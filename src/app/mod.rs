// ABOUTME: Tour controller and full-screen runner
// Owns pagination state, drives advances with feedback cues, fires completion once

pub mod events;

pub use events::{EventHandler, FlowEvent};

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Frame, Terminal};
use tracing::info;

use crate::components::{FadeTransition, FlowView};
use crate::error::FlowError;
use crate::feedback::{FeedbackCue, FeedbackDispatcher, TerminalBell};
use crate::flow::{Advance, FlowState, Screen, TourConfig};
use crate::theme::Theme;

/// No-argument completion callback, consumed the first time the tour
/// completes. Further advances cannot re-fire it.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// A paginated onboarding tour.
///
/// Construction takes the full configuration up front and validates it;
/// afterwards the only mutation is the advance action (plus transition
/// ticks). The caller is expected to tear the tour down once the
/// completion callback has fired.
pub struct Tour {
    theme: Theme,
    screens: Vec<Screen>,
    state: FlowState,
    transition: FadeTransition,
    view: FlowView,
    dispatcher: Box<dyn FeedbackDispatcher + Send>,
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tour")
            .field("screens", &self.screens)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Tour {
    /// Build a tour. Fails fast with [`FlowError::EmptyScreens`] when the
    /// configured screen list is empty.
    pub fn new(
        config: TourConfig,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> Result<Self, FlowError> {
        let state = FlowState::new(config.screens.len())?;
        Ok(Self {
            theme: config.theme,
            screens: config.screens,
            state,
            transition: FadeTransition::new(),
            view: FlowView::new(),
            dispatcher: Box::new(TerminalBell),
            on_complete: Some(Box::new(on_complete)),
        })
    }

    /// Replace the feedback dispatcher (default: terminal bell).
    pub fn with_dispatcher(mut self, dispatcher: impl FeedbackDispatcher + Send + 'static) -> Self {
        self.dispatcher = Box::new(dispatcher);
        self
    }

    /// Apply one advance action.
    ///
    /// The index mutation and transition restart are applied before the
    /// feedback trigger increments, so the cue always fires after the
    /// visual transition has begun. Intermediate advances play an impact
    /// cue, the completing advance a success cue, and the completion
    /// callback fires exactly once, after its cue.
    pub fn advance(&mut self) {
        match self.state.advance() {
            Advance::Stepped => {
                self.transition.restart(self.state.current_index());
                let trigger = self.state.bump_feedback();
                self.dispatcher.play(FeedbackCue::Impact, trigger);
            }
            Advance::Completed => {
                let trigger = self.state.bump_feedback();
                self.dispatcher.play(FeedbackCue::Success, trigger);
                info!(screens = self.state.screen_count(), "tour completed");
                if let Some(on_complete) = self.on_complete.take() {
                    on_complete();
                }
            }
            Advance::Settled => {}
        }
    }

    /// Decay the text transition by one tick.
    pub fn tick(&mut self) {
        self.transition.tick();
    }

    pub fn render(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        self.view.render(
            frame,
            area,
            &self.theme,
            &self.screens,
            &self.state,
            &self.transition,
        );
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screens[self.state.current_index()]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }
}

/// Tick interval for the runner: drives fade decay between input events.
const TICK_RATE: Duration = Duration::from_millis(80);

/// Run a tour full-screen until it completes or the user quits.
///
/// Returns `true` when the tour completed, `false` when it was abandoned.
/// The terminal is restored on either path; a panic hook installed by the
/// binary covers the remaining exits.
pub async fn run_tour(tour: &mut Tour) -> Result<bool> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, tour).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, tour: &mut Tour) -> Result<bool> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            tour.render(frame, area);
        })?;

        if tour.is_completed() {
            return Ok(true);
        }

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match EventHandler::handle_key_event(key) {
                        Some(FlowEvent::Advance) => tour.advance(),
                        Some(FlowEvent::Quit) => {
                            info!("tour abandoned");
                            return Ok(false);
                        }
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            tour.tick();
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::MockFeedbackDispatcher;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn three_screen_config() -> TourConfig {
        TourConfig::new(
            Theme::default(),
            vec![Screen::new("A"), Screen::new("B"), Screen::new("C")],
        )
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let config = TourConfig::new(Theme::default(), Vec::new());
        let err = Tour::new(config, || {}).unwrap_err();
        assert_eq!(err, FlowError::EmptyScreens);
    }

    #[test]
    fn test_cue_sequence_for_three_screens() {
        let mut dispatcher = MockFeedbackDispatcher::new();
        let mut seq = Sequence::new();
        dispatcher
            .expect_play()
            .with(eq(FeedbackCue::Impact), eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        dispatcher
            .expect_play()
            .with(eq(FeedbackCue::Impact), eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        dispatcher
            .expect_play()
            .with(eq(FeedbackCue::Success), eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut tour = Tour::new(three_screen_config(), || {})
            .unwrap()
            .with_dispatcher(dispatcher);

        tour.advance();
        assert_eq!(tour.current_screen().title, "B");
        tour.advance();
        assert_eq!(tour.current_screen().title, "C");
        tour.advance();
        assert!(tour.is_completed());
        assert_eq!(tour.current_index(), 2);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&completions);
        let mut tour = Tour::new(three_screen_config(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap()
        .with_dispatcher(crate::feedback::NoFeedback);

        tour.advance();
        tour.advance();
        assert_eq!(completions.load(Ordering::SeqCst), 0);
        tour.advance();
        assert_eq!(completions.load(Ordering::SeqCst), 1);

        // Advancing past completion neither re-fires nor moves the index
        tour.advance();
        tour.advance();
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert_eq!(tour.current_index(), 2);
    }

    #[test]
    fn test_single_screen_completes_immediately() {
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&completions);
        let config = TourConfig::new(Theme::default(), vec![Screen::new("Only")]);
        let mut tour = Tour::new(config, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap()
        .with_dispatcher(crate::feedback::NoFeedback);

        tour.advance();
        assert!(tour.is_completed());
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_cue_after_completion() {
        let mut dispatcher = MockFeedbackDispatcher::new();
        dispatcher.expect_play().times(2).return_const(());

        let config = TourConfig::new(Theme::default(), vec![Screen::new("A"), Screen::new("B")]);
        let mut tour = Tour::new(config, || {}).unwrap().with_dispatcher(dispatcher);

        tour.advance();
        tour.advance();
        tour.advance(); // settled, must not play
    }
}
