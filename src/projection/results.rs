//! Output structures for projections

use crate::session::SessionParams;
use super::state::ProjectionState;

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRow {
    pub year: u32,
    pub balance: f64,

    /// Contribution added during this year
    pub contribution: f64,

    /// Growth earned during this year
    pub growth: f64,
}

impl BalanceRow {
    /// Row for the state as it stands, before any growth is applied
    pub fn opening(state: &ProjectionState) -> Self {
        Self {
            year: state.year,
            balance: state.balance,
            contribution: 0.0,
            growth: 0.0,
        }
    }
}

/// Rows produced by one session's projection
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    pub principal: f64,
    pub target_balance: f64,
    pub rows: Vec<BalanceRow>,
}

impl ProjectionResult {
    pub fn new(params: &SessionParams) -> Self {
        Self {
            principal: params.principal,
            target_balance: params.target_balance,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: BalanceRow) {
        self.rows.push(row);
    }

    /// Totals across all recorded years
    pub fn summary(&self) -> ProjectionSummary {
        let final_balance = self.rows.last().map_or(self.principal, |row| row.balance);
        ProjectionSummary {
            years: self.rows.last().map_or(0, |row| row.year),
            final_balance,
            total_contributions: self.rows.iter().map(|row| row.contribution).sum(),
            total_growth: self.rows.iter().map(|row| row.growth).sum(),
            target_reached: !self.rows.is_empty() && final_balance >= self.target_balance,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub target_reached: bool,
}
