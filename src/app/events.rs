// ABOUTME: Keyboard event handling for the tour runner

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the tour runner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Move to the next screen (or complete the tour).
    Advance,
    /// Abandon the tour without completing it.
    Quit,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key event to a flow action, if it is bound to one.
    pub fn handle_key_event(key: KeyEvent) -> Option<FlowEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(FlowEvent::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                Some(FlowEvent::Advance)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(FlowEvent::Quit),
            _ => None,
        }
    }
}
