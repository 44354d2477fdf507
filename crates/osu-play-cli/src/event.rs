//! Event handling for keyboard input
//!
//! Letters are reserved for the search query, so navigation only uses
//! arrows and control chords.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Poll for keyboard events with a timeout
pub fn poll(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Ignore key release events on Windows
            if key.kind == event::KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Check if a key event aborts the prompt (Esc or Ctrl+C)
pub fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc || is_ctrl(key, 'c')
}

/// Check if a key event is navigation down
pub fn is_down(key: &KeyEvent) -> bool {
    key.code == KeyCode::Down || is_ctrl(key, 'n')
}

/// Check if a key event is navigation up
pub fn is_up(key: &KeyEvent) -> bool {
    key.code == KeyCode::Up || is_ctrl(key, 'p')
}

/// Check if a key event is enter/select
pub fn is_enter(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter)
}

/// Check if a key event is page down
pub fn is_page_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::PageDown)
}

/// Check if a key event is page up
pub fn is_page_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::PageUp)
}

/// Check if a key event deletes the last query character
pub fn is_backspace(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Backspace)
}

/// Printable character typed into the query, if any
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
