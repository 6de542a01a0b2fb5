//! Spread Arbitrage Bot - Main Library
//!
//! Startup layer around the strategy parameters.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI)
//! - **logging**: tracing subscriber setup
//! - **strategy_params**: parameter model, overlay and validation (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use spread_arb_bot::bin_common::{load_config_from_env, ConfigType};
//! use spread_arb_bot::strategy_params::load;
//! ```

// Re-export workspace libraries for convenience
pub use strategy_params;

pub mod logging;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, CliOptions, ConfigType, PrintFormat};
}
