#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the navigation stack and expense aggregation
//! primitives behind a small expense-tracking front end.
//!
//! ```
//! use expense_core::navigation::{NavigationController, Screen};
//!
//! let mut nav = NavigationController::new();
//! nav.push(Screen::Register);
//! assert_eq!(nav.pop(), Ok(Screen::Register));
//! assert!(nav.pop().is_err());
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod expenses;
pub mod navigation;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
