use colored::{Color, Colorize};

use crate::cli::output::OutputPreferences;
use crate::expenses::{CategoryStyle, ColorKey, IconKey};

fn terminal_color(key: ColorKey) -> Color {
    match key {
        ColorKey::Orange => Color::TrueColor {
            r: 255,
            g: 152,
            b: 0,
        },
        ColorKey::Blue => Color::Blue,
        ColorKey::Purple => Color::Magenta,
        ColorKey::Red => Color::Red,
        ColorKey::Pink => Color::BrightMagenta,
        ColorKey::Green => Color::Green,
        ColorKey::Grey => Color::BrightBlack,
    }
}

fn glyph(icon: IconKey) -> &'static str {
    match icon {
        IconKey::Restaurant => "🍽",
        IconKey::Car => "🚗",
        IconKey::Receipt => "🧾",
        IconKey::Movie => "🎬",
        IconKey::Health => "💊",
        IconKey::ShoppingBag => "🛍",
        IconKey::Money => "💰",
    }
}

fn ascii_tag(icon: IconKey) -> &'static str {
    match icon {
        IconKey::Restaurant => "[FD]",
        IconKey::Car => "[TR]",
        IconKey::Receipt => "[UT]",
        IconKey::Movie => "[EN]",
        IconKey::Health => "[HL]",
        IconKey::ShoppingBag => "[SH]",
        IconKey::Money => "[--]",
    }
}

/// Category badge: coloured glyph, or an ASCII tag in plain mode.
pub fn category_badge(style: CategoryStyle, prefs: &OutputPreferences) -> String {
    if prefs.screen_reader_mode {
        return format!("({})", style.icon);
    }
    if prefs.plain_mode {
        return ascii_tag(style.icon).to_string();
    }
    glyph(style.icon).color(terminal_color(style.color)).to_string()
}

/// Paints `text` in the category colour unless colours are off.
pub fn paint(text: &str, color: ColorKey, prefs: &OutputPreferences) -> String {
    if prefs.plain_mode || prefs.screen_reader_mode {
        text.to_string()
    } else {
        text.color(terminal_color(color)).to_string()
    }
}

pub fn navigation_hint(prefs: &OutputPreferences) -> String {
    let hint = "(↑/↓ move, Enter select, Esc back, q quit)";
    if prefs.plain_mode {
        "(Up/Down move, Enter select, Esc back, q quit)".to_string()
    } else {
        hint.dimmed().to_string()
    }
}
