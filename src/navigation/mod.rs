//! Stack-based screen navigation.

pub mod controller;
pub mod screen;

pub use controller::{NavAction, NavigationController};
pub use screen::Screen;
