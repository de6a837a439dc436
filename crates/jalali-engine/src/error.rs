//! Error types for jalali-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JalaliError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}

pub type Result<T> = std::result::Result<T, JalaliError>;
