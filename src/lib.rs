//! Invest Calculator - Interactive projection of an investment account
//!
//! This library provides:
//! - Banner and balance-line formatting for console output
//! - The yearly balance recurrence and a projection engine built on it
//! - A retry loop for prompting and validating console input
//! - The session controller that ties them together

pub mod error;
pub mod config;
pub mod format;
pub mod projection;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use error::{ConsoleError, ProjectionError, ValidationError};
pub use config::{CalculatorConfig, ParameterDefaults};
pub use format::{balance_line, banner};
pub use projection::{balance, ProjectionEngine, ProjectionResult, BalanceRow};
pub use input::{ask_with_retries, Console, Fallback, LineReader};
pub use session::{Calculator, SessionParams, SessionState};
