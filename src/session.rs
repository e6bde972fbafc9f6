//! Session controller: collects parameters, prints the projection and asks
//! whether to go again

use std::io::Write;

use log::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::error::{ConsoleError, ProjectionError};
use crate::format::{balance_line, banner, field_width};
use crate::input::{ask_with_retries, parse_number, parse_yes_no, Console, Fallback, LineReader};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Parameters of one investment projection
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    pub target_balance: f64,
    /// Starting balance
    pub principal: f64,
    /// Added each year before growth
    pub contribution: f64,
    /// Annual growth as a fraction
    pub rate_of_return: f64,
}

/// Where the controller is between prompts
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    CollectingParameters,
    Projecting(SessionParams),
    /// Projection printed; ask whether to start another session
    Done,
    Exit,
}

/// Interactive calculator driving sessions over a console
pub struct Calculator<R, W> {
    console: Console<R, W>,
    config: CalculatorConfig,
}

impl<R: LineReader, W: Write> Calculator<R, W> {
    pub fn new(console: Console<R, W>, config: CalculatorConfig) -> Self {
        Self { console, config }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run sessions until the user declines another one
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        banner(self.console.out(), "welcome to invest!", "*")?;
        self.console.say("")?;

        let mut state = SessionState::CollectingParameters;
        while state != SessionState::Exit {
            state = self.step(state)?;
        }

        self.console.say("")?;
        banner(self.console.out(), "bye!", "+")?;
        Ok(())
    }

    /// Perform the work of `state` and return the state that follows it
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, ConsoleError> {
        Ok(match state {
            SessionState::CollectingParameters => SessionState::Projecting(self.collect_parameters()?),
            SessionState::Projecting(params) => {
                self.console.say("")?;
                banner(self.console.out(), "calculations", "+")?;
                self.project(params)?;
                SessionState::Done
            }
            SessionState::Done => {
                self.console.say("")?;
                let again = ask_with_retries(
                    &mut self.console,
                    "Calculate another investment? ",
                    parse_yes_no,
                    self.config.retry_limit,
                    Fallback::Convert(&self.config.repeat_default),
                )?;
                if again {
                    SessionState::CollectingParameters
                } else {
                    SessionState::Exit
                }
            }
            SessionState::Exit => SessionState::Exit,
        })
    }

    fn ask_number(&mut self, prompt: &str, default: f64) -> Result<f64, ConsoleError> {
        ask_with_retries(
            &mut self.console,
            prompt,
            parse_number,
            self.config.retry_limit,
            Fallback::Value(default),
        )
    }

    /// Ask for the four session parameters in order
    pub fn collect_parameters(&mut self) -> Result<SessionParams, ConsoleError> {
        let defaults = self.config.defaults.clone();
        let params = SessionParams {
            target_balance: self.ask_number("Target balance? ", defaults.target_balance)?,
            principal: self.ask_number("Principal? ", defaults.principal)?,
            contribution: self.ask_number("Contribution? ", defaults.contribution)?,
            rate_of_return: self.ask_number("Rate of return? ", defaults.rate_of_return)?,
        };
        debug!("session parameters: {params:?}");
        Ok(params)
    }

    /// Print one balance line per year until the target is reached
    ///
    /// A validation failure ends the table early with an `Error!` line.
    pub fn project(&mut self, params: SessionParams) -> Result<ProjectionResult, ConsoleError> {
        // The year-0 line may be the principal alone, and it can be wider than the target
        let width = field_width(params.target_balance).max(field_width(params.principal));
        let engine = ProjectionEngine::new(
            params,
            ProjectionConfig {
                max_years: self.config.max_years,
            },
        );
        let mut result = ProjectionResult::new(engine.params());

        for row in engine.years() {
            let line = row.and_then(|row| {
                let line = balance_line(row.balance, width, row.year).map_err(ProjectionError::from)?;
                result.add_row(row);
                Ok(line)
            });
            match line {
                Ok(line) => self.console.say(&line)?,
                Err(e) => {
                    warn!("projection abandoned: {e}");
                    self.console.say(&format!("Error! {e}"))?;
                    break;
                }
            }
        }

        let summary = result.summary();
        info!(
            "projected {} years to {:.2} (contributions {:.2}, growth {:.2}, target reached: {})",
            summary.years,
            summary.final_balance,
            summary.total_contributions,
            summary.total_growth,
            summary.target_reached,
        );
        Ok(result)
    }
}
