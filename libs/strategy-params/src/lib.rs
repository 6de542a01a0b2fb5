//! Strategy parameters for the spread arbitrage bot
//!
//! Built once at startup and read everywhere after:
//!
//! ```no_run
//! let params = strategy_params::load("config/arb_config.yaml")?;
//! params.log_summary();
//! # Ok::<(), strategy_params::ConfigError>(())
//! ```
//!
//! - **parameters**: draft and validated parameter types, defaults
//! - **exchange**: venues, credentials and fee schedules
//! - **overlay**: merges the `exchanges` section of a YAML file onto a draft
//! - **validation**: live-trading pre-flight checks

pub mod error;
pub mod exchange;
pub mod loader;
pub mod overlay;
pub mod parameters;
pub mod validation;

pub use error::{ConfigError, Result};
pub use exchange::{Exchange, ExchangeBook, ExchangeCredentials, FeeSchedule};
pub use loader::{load, load_str};
pub use parameters::{Diagnostics, ExposureLimits, Parameters, ParametersDraft, StrategyThresholds};
pub use validation::{validate, MIN_TESTED_EXPOSURE};
