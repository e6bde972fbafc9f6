//! Calculator configuration and built-in defaults

/// Attempts allowed per prompt before falling back to the default
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Upper bound on projected years for a single session
pub const DEFAULT_MAX_YEARS: u32 = 1000;

/// Answer used when the repeat prompt runs out of attempts
pub const DEFAULT_REPEAT_ANSWER: &str = "no";

/// Values used when the user fails to supply a parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefaults {
    pub target_balance: f64,
    pub principal: f64,
    pub contribution: f64,
    pub rate_of_return: f64,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            target_balance: 1000.00,
            principal: 100.00,
            contribution: 50.00,
            rate_of_return: 0.05,
        }
    }
}

/// Configuration for a calculator run
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Attempts per prompt
    pub retry_limit: u32,

    /// Projection stops with an error after this many years
    pub max_years: u32,

    /// Fallback session parameters
    pub defaults: ParameterDefaults,

    /// Fallback answer to "Calculate another investment?"
    pub repeat_default: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            retry_limit: DEFAULT_RETRY_LIMIT,
            max_years: DEFAULT_MAX_YEARS,
            defaults: ParameterDefaults::default(),
            repeat_default: DEFAULT_REPEAT_ANSWER.to_string(),
        }
    }
}
