//! Year-by-year projection of an investment balance

mod state;
mod engine;
mod results;

pub use state::ProjectionState;
pub use engine::{balance, ProjectionEngine, ProjectionConfig, YearlyBalances};
pub use results::{BalanceRow, ProjectionResult, ProjectionSummary};
