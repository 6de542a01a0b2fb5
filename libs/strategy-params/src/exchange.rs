//! Trading venues and their credentials
//!
//! The set of venues is closed. Each one owns a uniform credential record,
//! so adding a venue only touches the [`Exchange`] enum and its key table.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Supported trading venues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Bitfinex,
    Okcoin,
    Bitstamp,
    Gemini,
    Kraken,
    Itbit,
    Btce,
    Poloniex,
    Gdax,
    Quadriga,
}

impl Exchange {
    /// Every venue, in configuration order
    pub const ALL: [Exchange; 10] = [
        Exchange::Bitfinex,
        Exchange::Okcoin,
        Exchange::Bitstamp,
        Exchange::Gemini,
        Exchange::Kraken,
        Exchange::Itbit,
        Exchange::Btce,
        Exchange::Poloniex,
        Exchange::Gdax,
        Exchange::Quadriga,
    ];

    /// Key used for this venue under the `exchanges` section
    pub fn key(&self) -> &'static str {
        match self {
            Exchange::Bitfinex => "bitfinex",
            Exchange::Okcoin => "okcoin",
            Exchange::Bitstamp => "bitstamp",
            Exchange::Gemini => "gemini",
            Exchange::Kraken => "kraken",
            Exchange::Itbit => "itbit",
            Exchange::Btce => "btce",
            Exchange::Poloniex => "poloniex",
            Exchange::Gdax => "gdax",
            Exchange::Quadriga => "quadriga",
        }
    }

    /// Look up a venue by its configuration key (exact match)
    pub fn from_key(key: &str) -> Option<Exchange> {
        Exchange::ALL.into_iter().find(|exchange| exchange.key() == key)
    }

    /// Whether the venue API requires a client identifier next to key/secret
    pub fn uses_client_id(&self) -> bool {
        matches!(self, Exchange::Bitstamp | Exchange::Quadriga)
    }

    /// Published fee schedule, where one is known
    fn default_fees(&self) -> FeeSchedule {
        match self {
            Exchange::Bitfinex | Exchange::Okcoin => FeeSchedule::flat(0.0020),
            _ => FeeSchedule::default(),
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fee rates as fractions (0.0020 = 0.20%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeeSchedule {
    pub trading: Option<f64>,
    pub withdrawal: Option<f64>,
    pub deposit: Option<f64>,
}

impl FeeSchedule {
    /// Same rate for trading, withdrawal and deposit
    pub fn flat(rate: f64) -> Self {
        Self {
            trading: Some(rate),
            withdrawal: Some(rate),
            deposit: Some(rate),
        }
    }
}

/// Credentials and fees for a single venue
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct ExchangeCredentials {
    pub api_key: Option<String>,
    #[serde(serialize_with = "redact")]
    pub api_secret: Option<String>,
    /// Only meaningful when [`Exchange::uses_client_id`] is true
    pub client_id: Option<String>,
    pub fees: FeeSchedule,
    pub enabled: bool,
}

impl ExchangeCredentials {
    fn for_exchange(exchange: Exchange) -> Self {
        Self {
            fees: exchange.default_fees(),
            ..Self::default()
        }
    }

    /// True when both key and secret are present and non-empty
    pub fn has_api_credentials(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.api_key) && present(&self.api_secret)
    }
}

impl fmt::Debug for ExchangeCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| REDACTED))
            .field("client_id", &self.client_id)
            .field("fees", &self.fees)
            .field("enabled", &self.enabled)
            .finish()
    }
}

const REDACTED: &str = "********";

fn redact<S: Serializer>(secret: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match secret {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}

/// One credential record per venue, always complete
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExchangeBook {
    venues: BTreeMap<Exchange, ExchangeCredentials>,
}

impl ExchangeBook {
    pub fn get(&self, exchange: Exchange) -> &ExchangeCredentials {
        // Constructors insert every venue, so the index cannot miss.
        &self.venues[&exchange]
    }

    pub fn get_mut(&mut self, exchange: Exchange) -> &mut ExchangeCredentials {
        self.venues
            .entry(exchange)
            .or_insert_with(|| ExchangeCredentials::for_exchange(exchange))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Exchange, &ExchangeCredentials)> {
        self.venues.iter().map(|(exchange, creds)| (*exchange, creds))
    }

    /// Venues whose enabled flag is set
    pub fn enabled(&self) -> impl Iterator<Item = Exchange> + '_ {
        self.iter()
            .filter(|(_, creds)| creds.enabled)
            .map(|(exchange, _)| exchange)
    }
}

impl Default for ExchangeBook {
    fn default() -> Self {
        Self {
            venues: Exchange::ALL
                .into_iter()
                .map(|exchange| (exchange, ExchangeCredentials::for_exchange(exchange)))
                .collect(),
        }
    }
}
