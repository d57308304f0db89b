mod state;

use crossterm::event::KeyCode;

pub use state::{App, Canvas};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// Keys that ask for a new color.
pub const TRIGGER_KEYS: [KeyCode; 4] = [
    KeyCode::Char(' '),
    KeyCode::Enter,
    KeyCode::Char('n'),
    KeyCode::Char('r'),
];
