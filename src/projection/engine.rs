//! Core projection engine: the yearly balance recurrence and its iterator

use crate::config::DEFAULT_MAX_YEARS;
use crate::error::{ProjectionError, ValidationError};
use crate::session::SessionParams;
use super::state::ProjectionState;
use super::results::BalanceRow;

/// Balance at the start of next year: add the contribution, then grow by `rate`
///
/// # Errors
/// `NegativeContribution` if `contribution < 0`, `RateOutOfRange` unless
/// `0 <= rate <= 1`.
pub fn balance(prev: f64, contribution: f64, rate: f64) -> Result<f64, ValidationError> {
    if contribution.is_nan() || contribution < 0.0 {
        return Err(ValidationError::NegativeContribution(contribution));
    }
    if !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::RateOutOfRange(rate));
    }
    Ok((prev + contribution) * (1.0 + rate))
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Last year the engine may reach before giving up on the target
    pub max_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    params: SessionParams,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine for one session's parameters
    pub fn new(params: SessionParams, config: ProjectionConfig) -> Self {
        Self { params, config }
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// Rows from year 0 until the target is reached or a step fails
    ///
    /// Year 0 is always emitted with the principal. The iterator ends after
    /// the first row at or above the target, or after the first error.
    pub fn years(&self) -> YearlyBalances<'_> {
        YearlyBalances {
            engine: self,
            state: None,
            finished: false,
        }
    }

    /// Advance `state` by one year
    fn step(&self, state: &mut ProjectionState) -> Result<BalanceRow, ProjectionError> {
        if state.year >= self.config.max_years {
            return Err(ProjectionError::YearLimit(self.config.max_years));
        }

        let contribution = self.params.contribution;
        let opening = state.balance;
        let next = balance(opening, contribution, self.params.rate_of_return)?;

        // Contribution 0 at rate 0 (or a negative balance) never reaches the target
        if next <= opening {
            return Err(ProjectionError::Stalled {
                year: state.year + 1,
                balance: opening,
            });
        }

        state.advance_year(next, contribution);
        Ok(BalanceRow {
            year: state.year,
            balance: next,
            contribution,
            growth: next - opening - contribution,
        })
    }
}

/// Iterator over the yearly rows of a projection
pub struct YearlyBalances<'a> {
    engine: &'a ProjectionEngine,
    state: Option<ProjectionState>,
    finished: bool,
}

impl Iterator for YearlyBalances<'_> {
    type Item = Result<BalanceRow, ProjectionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let target = self.engine.params.target_balance;

        if self.state.is_none() {
            let state = ProjectionState::from_params(&self.engine.params);
            let row = BalanceRow::opening(&state);
            self.finished = state.balance >= target;
            self.state = Some(state);
            return Some(Ok(row));
        }

        let state = self.state.as_mut()?;
        let row = self.engine.step(state);
        self.finished = match &row {
            Ok(row) => row.balance >= target,
            Err(_) => true,
        };
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Rows produced before the first error, and that error
    fn run(engine: &ProjectionEngine) -> (Vec<BalanceRow>, Option<ProjectionError>) {
        let mut rows = Vec::new();
        for row in engine.years() {
            match row {
                Ok(row) => rows.push(row),
                Err(e) => return (rows, Some(e)),
            }
        }
        (rows, None)
    }

    fn params(target: f64, principal: f64, contribution: f64, rate: f64) -> SessionParams {
        SessionParams {
            target_balance: target,
            principal,
            contribution,
            rate_of_return: rate,
        }
    }

    #[test]
    fn test_balance_example() {
        assert_eq!(balance(120.25, 20.0, 0.05).unwrap(), 147.26250000000002);
    }

    #[test]
    fn test_balance_matches_recurrence() {
        for &prev in &[0.0, 1.0, 99.5, 12_345.678] {
            for &c in &[0.0, 0.01, 50.0] {
                for &r in &[0.0, 0.05, 0.5, 1.0] {
                    assert_eq!(balance(prev, c, r).unwrap(), (prev + c) * (1.0 + r));
                }
            }
        }
    }

    #[test]
    fn test_balance_rejects_negative_contribution() {
        assert_eq!(
            balance(100.0, -1.0, 0.05),
            Err(ValidationError::NegativeContribution(-1.0))
        );
    }

    #[test]
    fn test_balance_rejects_rate_out_of_range() {
        assert_eq!(balance(100.0, 5.0, 1.5), Err(ValidationError::RateOutOfRange(1.5)));
        assert_eq!(balance(100.0, 5.0, -0.05), Err(ValidationError::RateOutOfRange(-0.05)));
    }

    #[test]
    fn test_projection_stops_at_target() {
        let engine = ProjectionEngine::new(params(120.0, 100.0, 0.0, 0.10), ProjectionConfig::default());
        let (rows, error) = run(&engine);

        assert!(error.is_none());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].balance, 100.0);
        assert_relative_eq!(rows[1].balance, 110.0, epsilon = 1e-9);
        assert_relative_eq!(rows[2].balance, 121.0, epsilon = 1e-9);
        assert_eq!(rows[2].year, 2);
    }

    #[test]
    fn test_principal_already_at_target() {
        let engine = ProjectionEngine::new(params(500.0, 500.0, 50.0, 0.05), ProjectionConfig::default());
        let rows: Vec<_> = engine.years().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_ref().unwrap().year, 0);
    }

    #[test]
    fn test_projection_reports_invalid_rate_after_year_zero() {
        let engine = ProjectionEngine::new(params(1000.0, 100.0, 50.0, 2.0), ProjectionConfig::default());
        let (rows, error) = run(&engine);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            error,
            Some(ProjectionError::Invalid(ValidationError::RateOutOfRange(2.0)))
        );
    }

    #[test]
    fn test_projection_without_growth_stalls() {
        let engine = ProjectionEngine::new(params(1000.0, 100.0, 0.0, 0.0), ProjectionConfig::default());
        let (rows, error) = run(&engine);
        assert_eq!(rows.len(), 1);
        assert_eq!(error, Some(ProjectionError::Stalled { year: 1, balance: 100.0 }));
    }

    #[test]
    fn test_projection_year_limit() {
        let config = ProjectionConfig { max_years: 5 };
        let engine = ProjectionEngine::new(params(1_000_000.0, 100.0, 1.0, 0.01), config);
        let (rows, error) = run(&engine);
        assert_eq!(rows.len(), 6);
        assert_eq!(error, Some(ProjectionError::YearLimit(5)));
    }

    #[test]
    fn test_growth_and_contribution_split() {
        let engine = ProjectionEngine::new(params(200.0, 100.0, 50.0, 0.05), ProjectionConfig::default());
        let row = engine.years().nth(1).unwrap().unwrap();
        assert_relative_eq!(row.balance, 157.5);
        assert_eq!(row.contribution, 50.0);
        assert_relative_eq!(row.growth, 7.5, epsilon = 1e-9);
    }
}
