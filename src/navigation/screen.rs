use std::fmt;

use serde::{Deserialize, Serialize};

/// Destinations the application can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Register,
    Home,
    ExpenseList,
    Profile,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Login,
        Screen::Register,
        Screen::Home,
        Screen::ExpenseList,
        Screen::Profile,
        Screen::Settings,
    ];

    /// Title shown in the header when the screen is current.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Register => "Create Account",
            Screen::Home => "Dashboard",
            Screen::ExpenseList => "Expenses",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
