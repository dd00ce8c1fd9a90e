//! Scripted key input for non-interactive runs.
//!
//! When `EXPENSE_CORE_TEST_KEYS` is set, keys are taken from it instead of the
//! terminal: comma-separated tokens such as `DOWN,ENTER,ESC,f,q`. Once the
//! script runs out the session quits.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

use super::navigation::NavKey;

pub const TEST_KEYS_ENV: &str = "EXPENSE_CORE_TEST_KEYS";

struct KeyQueue {
    enabled: bool,
    keys: VecDeque<NavKey>,
}

impl KeyQueue {
    fn from_env() -> Self {
        match env::var(TEST_KEYS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                keys: parse_keys(&raw),
            },
            Err(_) => Self {
                enabled: false,
                keys: VecDeque::new(),
            },
        }
    }
}

static KEYS: Lazy<Mutex<KeyQueue>> = Lazy::new(|| Mutex::new(KeyQueue::from_env()));

pub fn is_enabled() -> bool {
    KEYS.lock().map(|guard| guard.enabled).unwrap_or(false)
}

/// `None` when scripting is off; otherwise the next key, or quit when exhausted.
pub fn next_key() -> Option<NavKey> {
    let mut guard = KEYS.lock().ok()?;
    if !guard.enabled {
        return None;
    }
    Some(guard.keys.pop_front().unwrap_or(NavKey::Char('q')))
}

pub fn install_keys(keys: Vec<NavKey>) {
    if let Ok(mut guard) = KEYS.lock() {
        guard.enabled = true;
        guard.keys = keys.into();
    }
}

pub fn reset_keys() {
    if let Ok(mut guard) = KEYS.lock() {
        guard.enabled = false;
        guard.keys.clear();
    }
}

fn parse_keys(raw: &str) -> VecDeque<NavKey> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_key)
        .collect()
}

fn parse_key(token: &str) -> Option<NavKey> {
    match token.to_ascii_uppercase().as_str() {
        "UP" => Some(NavKey::Up),
        "DOWN" => Some(NavKey::Down),
        "LEFT" => Some(NavKey::Left),
        "RIGHT" => Some(NavKey::Right),
        "ENTER" | "RETURN" => Some(NavKey::Enter),
        "ESC" | "ESCAPE" | "BACK" => Some(NavKey::Esc),
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(NavKey::Char(ch)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_single_char_tokens() {
        let keys: Vec<NavKey> = parse_keys("down, ENTER ,esc,f,,bogus,q").into();
        assert_eq!(
            keys,
            vec![
                NavKey::Down,
                NavKey::Enter,
                NavKey::Esc,
                NavKey::Char('f'),
                NavKey::Char('q'),
            ]
        );
    }

    #[test]
    fn installed_script_quits_when_exhausted() {
        install_keys(vec![NavKey::Enter]);
        assert_eq!(next_key(), Some(NavKey::Enter));
        assert_eq!(next_key(), Some(NavKey::Char('q')));
        reset_keys();
        assert_eq!(next_key(), None);
    }
}
