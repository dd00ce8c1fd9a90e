use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal,
};

use super::test_mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
    Unknown,
}

impl NavKey {
    fn from_key_code(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => NavKey::Char('q'),
            KeyCode::Up => NavKey::Up,
            KeyCode::Down => NavKey::Down,
            KeyCode::Left => NavKey::Left,
            KeyCode::Right => NavKey::Right,
            KeyCode::Enter => NavKey::Enter,
            KeyCode::Esc | KeyCode::Backspace => NavKey::Esc,
            KeyCode::Char(c) => NavKey::Char(c),
            _ => NavKey::Unknown,
        }
    }
}

/// Blocks until a recognised key is pressed, or takes the next scripted key.
pub fn read_nav_key() -> io::Result<NavKey> {
    if let Some(key) = test_mode::next_key() {
        return Ok(key);
    }

    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                match NavKey::from_key_code(key.code, key.modifiers) {
                    NavKey::Unknown => continue,
                    nav => break Ok(nav),
                }
            }
            Ok(_) => continue,
            Err(err) => break Err(err),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
