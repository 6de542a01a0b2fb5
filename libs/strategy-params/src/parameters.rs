//! Strategy parameters
//!
//! [`ParametersDraft`] is the mutable stage: built from defaults, then
//! overlaid from file. [`Parameters`] is what validation hands back and what
//! the trading loop reads. It has no setters.

use crate::exchange::{Exchange, ExchangeBook, ExchangeCredentials};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Entry/exit thresholds and loop pacing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyThresholds {
    /// Spread above which trailing spreads are generated to capture an opportunity
    pub spread_entry: f64,

    /// Maximum gap between the target limit price and the price the order books
    /// can actually fill. Above it no trade is generated (slippage risk).
    pub price_delta_limit: f64,

    /// Offset under the current spread at which the trailing spread is set
    pub trailing_spread_limit: f64,

    /// Consecutive iterations the spread must stay between target and trailing
    /// spread before orders are sent
    pub trailing_spread_count: u32,

    /// Required order book liquidity as a multiple of the order size
    pub order_book_factor: f64,

    /// Net profit target after fees, used to derive the exit threshold
    pub spread_target: f64,

    /// Seconds between two quote downloads
    pub interval_secs: f64,

    /// Hard stop on the number of iterations (troubleshooting)
    pub debug_max_iterations: u64,

    /// Iterations after which an open trade is closed regardless of spread
    pub max_trade_iterations: u64,
}

/// How much capital a trade may commit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureLimits {
    /// Compute and log signals without placing orders
    pub demo: bool,

    /// Use the whole available balance instead of `tested_exposure`
    pub use_full_exposure: bool,

    /// USD amount per trade when `use_full_exposure` is false
    pub tested_exposure: f64,

    /// Largest order sent to a single venue
    pub max_exposure: f64,
}

/// Informational only, no effect on trading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub use_volatility: bool,
    /// Window length in iterations
    pub volatility_period: u32,
}

fn default_spread_entry() -> f64 {
    0.0080 // 0.80%
}

fn default_spread_target() -> f64 {
    0.0050 // 0.50%
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            spread_entry: default_spread_entry(),
            price_delta_limit: 0.10,
            trailing_spread_limit: 0.0008,
            trailing_spread_count: 5,
            order_book_factor: 3.0,
            spread_target: default_spread_target(),
            interval_secs: 3.0,
            debug_max_iterations: 3_200_000,
            // 180 days at 3 second iterations
            max_trade_iterations: 5_184_000,
        }
    }
}

impl Default for ExposureLimits {
    fn default() -> Self {
        Self {
            demo: true,
            use_full_exposure: false,
            tested_exposure: 5.00,
            max_exposure: 25_000.00,
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            use_volatility: false,
            volatility_period: 600,
        }
    }
}

/// Mutable configuration, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParametersDraft {
    pub thresholds: StrategyThresholds,
    pub exposure: ExposureLimits,
    pub diagnostics: Diagnostics,
    pub exchanges: ExchangeBook,
}

impl ParametersDraft {
    /// Fresh draft with the built-in defaults
    ///
    /// Logs the two headline thresholds so operators see them at startup.
    pub fn defaults() -> Self {
        let draft = Self::default();
        info!("spread entry: {}", draft.thresholds.spread_entry);
        info!("spread entry target: {}", draft.thresholds.spread_target);
        draft
    }

    pub(crate) fn freeze(self) -> Parameters {
        Parameters {
            thresholds: self.thresholds,
            exposure: self.exposure,
            diagnostics: self.diagnostics,
            exchanges: self.exchanges,
        }
    }
}

/// Validated, read-only configuration
///
/// Only obtainable through validation. Fields are private and every accessor
/// takes `&self`, so a value shared across workers cannot change under them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameters {
    thresholds: StrategyThresholds,
    exposure: ExposureLimits,
    diagnostics: Diagnostics,
    exchanges: ExchangeBook,
}

impl Parameters {
    pub fn thresholds(&self) -> &StrategyThresholds {
        &self.thresholds
    }

    pub fn exposure(&self) -> &ExposureLimits {
        &self.exposure
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn exchanges(&self) -> &ExchangeBook {
        &self.exchanges
    }

    pub fn exchange(&self, exchange: Exchange) -> &ExchangeCredentials {
        self.exchanges.get(exchange)
    }

    pub fn enabled_exchanges(&self) -> impl Iterator<Item = Exchange> + '_ {
        self.exchanges.enabled()
    }

    pub fn is_demo(&self) -> bool {
        self.exposure.demo
    }

    /// Polling interval between iterations, `None` if negative or not finite
    pub fn interval(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.thresholds.interval_secs).ok()
    }

    /// Effective configuration as YAML, secrets masked
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Effective configuration as pretty JSON, secrets masked
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        let t = &self.thresholds;
        let e = &self.exposure;
        info!("Strategy parameters:");
        info!("  Mode: {}", if e.demo { "demo (no orders)" } else { "live" });
        info!("  Spread entry: {:.2}%", t.spread_entry * 100.0);
        info!("  Spread target: {:.2}%", t.spread_target * 100.0);
        info!(
            "  Trailing spread: -{:.2}% x{} confirmations",
            t.trailing_spread_limit * 100.0,
            t.trailing_spread_count
        );
        info!("  Order book factor: {}", t.order_book_factor);
        info!("  Interval: {} seconds", t.interval_secs);
        if e.use_full_exposure {
            info!("  Exposure: full balance (max ${:.2} per venue)", e.max_exposure);
        } else {
            info!(
                "  Exposure: ${:.2} per trade (max ${:.2} per venue)",
                e.tested_exposure, e.max_exposure
            );
        }
        if self.diagnostics.use_volatility {
            info!("  Volatility period: {} iterations", self.diagnostics.volatility_period);
        }

        let enabled: Vec<_> = self.enabled_exchanges().map(|x| x.key()).collect();
        if enabled.is_empty() {
            info!("  Exchanges: none enabled");
        } else {
            info!("  Exchanges: {}", enabled.join(", "));
        }
    }
}
