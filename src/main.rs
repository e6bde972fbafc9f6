//! Invest Calculator CLI
//!
//! Asks for a target balance, principal, contribution and rate of return,
//! then prints the balance for each year until the target is reached.

use anyhow::Result;
use clap::Parser;
use invest_calculator::config::{DEFAULT_MAX_YEARS, DEFAULT_RETRY_LIMIT};
use invest_calculator::{Calculator, CalculatorConfig, Console, ParameterDefaults};

#[derive(Parser, Debug)]
#[command(version, about = "Project the growth of an investment account")]
struct Args {
    /// Attempts per prompt before using the default
    #[arg(long, default_value_t = DEFAULT_RETRY_LIMIT)]
    retries: u32,

    /// Give up on a projection after this many years
    #[arg(long, default_value_t = DEFAULT_MAX_YEARS)]
    max_years: u32,

    /// Target balance used when the prompt gets no valid answer
    #[arg(long, default_value_t = ParameterDefaults::default().target_balance)]
    default_target: f64,

    /// Principal used when the prompt gets no valid answer
    #[arg(long, default_value_t = ParameterDefaults::default().principal)]
    default_principal: f64,

    /// Contribution used when the prompt gets no valid answer
    #[arg(long, default_value_t = ParameterDefaults::default().contribution)]
    default_contribution: f64,

    /// Rate of return used when the prompt gets no valid answer
    #[arg(long, default_value_t = ParameterDefaults::default().rate_of_return)]
    default_rate: f64,
}

impl From<Args> for CalculatorConfig {
    fn from(args: Args) -> Self {
        Self {
            retry_limit: args.retries,
            max_years: args.max_years,
            defaults: ParameterDefaults {
                target_balance: args.default_target,
                principal: args.default_principal,
                contribution: args.default_contribution,
                rate_of_return: args.default_rate,
            },
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = CalculatorConfig::from(Args::parse());
    log::debug!("starting with {config:?}");

    let mut calculator = Calculator::new(Console::stdio(), config);
    calculator.run()?;
    Ok(())
}
