//! YAML overlay
//!
//! Merges the `exchanges` section of a config file onto a draft. Only venue
//! credentials are overlay-configurable; every other top-level key is ignored
//! and the strategy thresholds keep their built-in values.

use crate::error::{ConfigError, Result};
use crate::exchange::Exchange;
use crate::parameters::ParametersDraft;
use serde::de::Error as _;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Top level of the config document
#[derive(Debug, Default, Deserialize)]
struct OverlayDocument {
    #[serde(default)]
    exchanges: Option<Mapping>,
}

/// One venue under `exchanges`
#[derive(Debug, Default, Deserialize)]
struct ExchangeEntry {
    /// Kept untyped: only the string `"true"` enables a venue
    #[serde(default)]
    enabled: Option<Value>,
    // Credentials accept any scalar: numeric client ids are common.
    #[serde(default)]
    key: Option<Value>,
    /// Older name for `key`
    #[serde(default)]
    api: Option<Value>,
    #[serde(default)]
    secret: Option<Value>,
    #[serde(default, alias = "clientId")]
    client_id: Option<Value>,
}

impl ExchangeEntry {
    // Native booleans, "yes", "1" and any other spelling stay disabled.
    // TODO: confirm with the desk whether YAML booleans should enable a venue.
    fn is_enabled(&self) -> bool {
        matches!(&self.enabled, Some(Value::String(s)) if s == "true")
    }
}

/// Render a scalar credential as text; null means absent
fn scalar_text(value: Option<Value>, field: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(ConfigError::Parse(serde_yaml::Error::custom(format!(
            "{} must be a scalar",
            field
        )))),
    }
}

/// Read `path` and merge it onto `draft`
pub fn apply_file(path: impl AsRef<Path>, draft: &mut ParametersDraft) -> Result<()> {
    let path = path.as_ref();
    let yaml_content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Applying config overlay from {}", path.display());
    apply_str(&yaml_content, draft)
}

/// Merge an in-memory YAML document onto `draft`
pub fn apply_str(yaml_content: &str, draft: &mut ParametersDraft) -> Result<()> {
    let document: Value = serde_yaml::from_str(yaml_content)?;

    // An empty file carries no overrides.
    let document: OverlayDocument = match document {
        Value::Null => OverlayDocument::default(),
        Value::Mapping(_) => serde_yaml::from_value(document)?,
        _ => return Err(not_a_mapping("config root")),
    };

    let Some(exchanges) = document.exchanges else {
        debug!("No exchanges section, keeping defaults");
        return Ok(());
    };

    for exchange in Exchange::ALL {
        let entry: ExchangeEntry = match exchanges.get(exchange.key()) {
            None | Some(Value::Null) => continue,
            Some(value @ Value::Mapping(_)) => serde_yaml::from_value(value.clone())?,
            Some(_) => return Err(not_a_mapping(&format!("exchanges.{}", exchange))),
        };

        let enabled = entry.is_enabled();
        let field = |name: &str| format!("exchanges.{}.{}", exchange, name);
        let key = scalar_text(entry.key, &field("key"))?;
        let api = scalar_text(entry.api, &field("api"))?;
        let secret = scalar_text(entry.secret, &field("secret"))?;
        let client_id = scalar_text(entry.client_id, &field("client_id"))?;

        let creds = draft.exchanges.get_mut(exchange);
        creds.enabled = enabled;
        creds.api_key = key.or(api);
        creds.api_secret = secret;
        if exchange.uses_client_id() {
            creds.client_id = client_id;
        }

        debug!("{} overlay applied (enabled: {})", exchange, creds.enabled);
    }

    for (name, _) in exchanges.iter() {
        let known = name.as_str().and_then(Exchange::from_key).is_some();
        if !known {
            debug!("Ignoring unknown exchange entry: {:?}", name);
        }
    }

    Ok(())
}

fn not_a_mapping(what: &str) -> ConfigError {
    ConfigError::Parse(serde_yaml::Error::custom(format!("{} must be a mapping", what)))
}
