//! Integration test: loading parameters from YAML files on disk

use std::io::Write;
use strategy_params::{load, validate, ConfigError, Exchange, ParametersDraft};
use tempfile::NamedTempFile;

const FULL_CONFIG: &str = r#"
log_level: debug
exchanges:
  bitfinex:
    enabled: "true"
    key: bfx-key
    secret: bfx-secret
  bitstamp:
    enabled: "true"
    api: bs-api
    secret: bs-secret
    client_id: "987"
  kraken:
    enabled: true
    key: kr-key
    secret: kr-secret
  binance:
    enabled: "true"
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(FULL_CONFIG);
    let params = load(file.path()).unwrap();

    assert!(params.is_demo());
    assert_eq!(
        params.enabled_exchanges().collect::<Vec<_>>(),
        vec![Exchange::Bitfinex, Exchange::Bitstamp]
    );

    let bitstamp = params.exchange(Exchange::Bitstamp);
    assert_eq!(bitstamp.api_key.as_deref(), Some("bs-api"));
    assert_eq!(bitstamp.client_id.as_deref(), Some("987"));

    // Native boolean does not enable the venue, credentials still land.
    let kraken = params.exchange(Exchange::Kraken);
    assert!(!kraken.enabled);
    assert_eq!(kraken.api_key.as_deref(), Some("kr-key"));

    let gemini = params.exchange(Exchange::Gemini);
    assert!(!gemini.enabled);
    assert!(gemini.api_key.is_none());
    assert!(gemini.api_secret.is_none());
}

#[test]
fn test_file_without_exchanges_gives_defaults() {
    let file = write_config("demo: false\ntested_exposure: 1.0\n");
    let draft = ParametersDraft::from_file(file.path()).unwrap();
    assert_eq!(draft, ParametersDraft::default());
}

#[test]
fn test_loading_twice_is_idempotent() {
    let file = write_config(FULL_CONFIG);
    let first = load(file.path()).unwrap();
    let second = load(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_file() {
    let file = write_config("exchanges:\n  bitfinex: {enabled: \"true\"\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileAccess { .. }));
}

#[test]
fn test_live_draft_from_file() {
    let file = write_config(FULL_CONFIG);

    let mut draft = ParametersDraft::from_file(file.path()).unwrap();
    draft.exposure.demo = false;
    draft.exposure.tested_exposure = 8.00;
    let err = validate(draft).unwrap_err();
    assert!(err.is_validation());

    let mut draft = ParametersDraft::from_file(file.path()).unwrap();
    draft.exposure.demo = false;
    draft.exposure.tested_exposure = 1_000.00;
    let params = validate(draft).unwrap();
    assert_eq!(params.exposure().tested_exposure, 1_000.00);
    assert_eq!(params.exposure().max_exposure, 25_000.00);
    assert!(params.exchange(Exchange::Bitfinex).enabled);
}
