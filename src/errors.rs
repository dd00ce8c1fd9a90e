use thiserror::Error;

/// Failures raised by the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot pop the last screen on the navigation stack")]
    EmptyStack,
}

/// Rejected expense construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpenseError {
    #[error("expense id must not be empty")]
    EmptyId,
    #[error("invalid amount for expense `{id}`: {amount}")]
    InvalidAmount { id: String, amount: f64 },
    #[error("duplicate expense id: {0}")]
    DuplicateId(String),
}

/// Error type that captures configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
