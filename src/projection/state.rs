//! Running state of a projection between years

use crate::session::SessionParams;

/// Balance and counters at the start of a projection year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Years elapsed since the initial investment
    pub year: u32,

    /// Running balance
    pub balance: f64,

    /// Contributions added so far (the principal is not counted)
    pub total_contributions: f64,
}

impl ProjectionState {
    /// Initialize state at year 0 with the principal as the balance
    pub fn from_params(params: &SessionParams) -> Self {
        Self {
            year: 0,
            balance: params.principal,
            total_contributions: 0.0,
        }
    }

    /// Move to the next year with the balance produced by the recurrence
    pub fn advance_year(&mut self, new_balance: f64, contribution: f64) {
        self.year += 1;
        self.balance = new_balance;
        self.total_contributions += contribution;
    }
}
