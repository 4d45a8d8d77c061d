use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Unknown expense category: {0}")]
    InvalidCategory(String),

    #[error("Unknown currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
