// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to flow actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtour::app::{EventHandler, FlowEvent};

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn test_advance_key_events() {
    for code in [
        KeyCode::Enter,
        KeyCode::Char(' '),
        KeyCode::Right,
        KeyCode::Char('l'),
    ] {
        assert_eq!(
            EventHandler::handle_key_event(create_key_event(code)),
            Some(FlowEvent::Advance),
            "expected {code:?} to advance"
        );
    }
}

#[test]
fn test_quit_key_events() {
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('q'))),
        Some(FlowEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc)),
        Some(FlowEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event_with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )),
        Some(FlowEvent::Quit)
    );
}

#[test]
fn test_unbound_keys_are_ignored() {
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('x'))),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Left)),
        None
    );
    // Ctrl does not turn other bindings into actions
    assert_eq!(
        EventHandler::handle_key_event(create_key_event_with_modifiers(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL,
        )),
        None
    );
}
