//! Error types for validation, projection and console failures

use thiserror::Error;

/// A rejected argument or a piece of console input that could not be converted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("border must be exactly one character (got {0:?})")]
    InvalidBorder(String),
    #[error("amount must be positive (got {0})")]
    NonPositiveAmount(f64),
    #[error("amount width {width} is too small for {amount:.2} (need at least {required})")]
    InsufficientWidth {
        amount: f64,
        width: usize,
        required: f64,
    },
    #[error("contribution must not be negative (got {0})")]
    NegativeContribution(f64),
    #[error("rate of return must be between 0 and 1 (got {0})")]
    RateOutOfRange(f64),
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("expected yes/y or no/n (got {0:?})")]
    UnrecognizedAnswer(String),
}

/// Reasons a year-by-year projection stops before reaching its target
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("balance of {balance:.2} stopped growing in year {year}")]
    Stalled { year: u32, balance: f64 },
    #[error("target not reached within {0} years")]
    YearLimit(u32),
}

/// Failures talking to the terminal
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("default {default:?} was rejected: {source}")]
    InvalidDefault {
        default: String,
        source: ValidationError,
    },
}
