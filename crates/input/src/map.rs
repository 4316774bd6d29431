//! Event mapping from terminal events to game events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_memory_types::{GameEvent, Point};

/// Map a terminal event to a game event.
///
/// Left-button mouse releases become pointer releases at the event's cell
/// position; quit keys become [`GameEvent::Quit`]. Everything else (mouse
/// moves, drags, other keys, resizes) maps to `None` and is ignored by the
/// game.
pub fn map_event(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(GameEvent::Quit)
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(GameEvent::PointerRelease(Point::new(*column, *row))),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
