use tracing::{debug, warn};

use crate::errors::NavigationError;

use super::Screen;

/// A single navigation request, as issued by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Push(Screen),
    Pop,
    ReplaceTop(Screen),
    ResetTo(Screen),
}

/// Owns the screen history. The top of the stack is the visible screen.
///
/// The stack always holds at least one entry: every constructor seeds it and
/// the only shrinking operation, [`pop`](Self::pop), refuses to remove the
/// last screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    stack: Vec<Screen>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// Starts on the login screen.
    pub fn new() -> Self {
        Self::with_root(Screen::Login)
    }

    pub fn with_root(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Screen {
        // Non-empty by construction.
        self.stack[self.stack.len() - 1]
    }

    /// Bottom-to-top view of the history.
    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_pop(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn push(&mut self, screen: Screen) {
        debug!(from = %self.current(), to = %screen, "push");
        self.stack.push(screen);
    }

    /// Removes the current screen and returns it.
    pub fn pop(&mut self) -> Result<Screen, NavigationError> {
        if !self.can_pop() {
            warn!(current = %self.current(), "pop rejected on root screen");
            return Err(NavigationError::EmptyStack);
        }
        let popped = self.stack.pop().ok_or(NavigationError::EmptyStack)?;
        debug!(from = %popped, to = %self.current(), "pop");
        Ok(popped)
    }

    /// Swaps the current screen for `screen`, returning the discarded one.
    pub fn replace_top(&mut self, screen: Screen) -> Screen {
        let top = self.stack.len() - 1;
        let discarded = std::mem::replace(&mut self.stack[top], screen);
        debug!(from = %discarded, to = %screen, "replace top");
        discarded
    }

    /// Clears the history and leaves `screen` as the only entry.
    ///
    /// Returns how many screens were discarded.
    pub fn reset_to(&mut self, screen: Screen) -> usize {
        let discarded = self.stack.len();
        self.stack = vec![screen];
        debug!(discarded, to = %screen, "reset");
        discarded
    }

    /// Dispatches a [`NavAction`]. Only `Pop` can fail.
    pub fn apply(&mut self, action: NavAction) -> Result<Screen, NavigationError> {
        match action {
            NavAction::Push(screen) => self.push(screen),
            NavAction::Pop => {
                self.pop()?;
            }
            NavAction::ReplaceTop(screen) => {
                self.replace_top(screen);
            }
            NavAction::ResetTo(screen) => {
                self.reset_to(screen);
            }
        }
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login() {
        let nav = NavigationController::new();
        assert_eq!(nav.stack(), &[Screen::Login]);
        assert!(!nav.can_pop());
    }

    #[test]
    fn push_then_pop_returns_to_previous_screen() {
        let mut nav = NavigationController::new();
        nav.push(Screen::Register);
        assert_eq!(nav.stack(), &[Screen::Login, Screen::Register]);

        let popped = nav.pop().expect("pop succeeds");
        assert_eq!(popped, Screen::Register);
        assert_eq!(nav.stack(), &[Screen::Login]);
    }

    #[test]
    fn pop_on_root_is_rejected_and_leaves_stack_intact() {
        let mut nav = NavigationController::new();
        let err = nav.pop().expect_err("root pop must fail");
        assert_eq!(err, NavigationError::EmptyStack);
        assert_eq!(nav.stack(), &[Screen::Login]);
    }

    #[test]
    fn replace_top_keeps_depth() {
        let mut nav = NavigationController::new();
        let discarded = nav.replace_top(Screen::Home);
        assert_eq!(discarded, Screen::Login);
        assert_eq!(nav.stack(), &[Screen::Home]);
        assert!(nav.pop().is_err());
    }

    #[test]
    fn reset_discards_entire_history() {
        let mut nav = NavigationController::with_root(Screen::Home);
        nav.push(Screen::Profile);
        nav.push(Screen::Settings);

        let discarded = nav.reset_to(Screen::Login);
        assert_eq!(discarded, 3);
        assert_eq!(nav.stack(), &[Screen::Login]);
    }

    #[test]
    fn apply_reports_new_current_screen() {
        let mut nav = NavigationController::new();
        assert_eq!(
            nav.apply(NavAction::ReplaceTop(Screen::Home)),
            Ok(Screen::Home)
        );
        assert_eq!(
            nav.apply(NavAction::Push(Screen::ExpenseList)),
            Ok(Screen::ExpenseList)
        );
        assert_eq!(nav.apply(NavAction::Pop), Ok(Screen::Home));
        assert_eq!(
            nav.apply(NavAction::Pop),
            Err(NavigationError::EmptyStack)
        );
    }
}
