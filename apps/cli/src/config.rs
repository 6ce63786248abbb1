//! # Configuration
//!
//! Startup defaults for the terminal front end.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (applied in lib.rs, not here)
//! 2. Environment variables (`WESPLIT_*`)
//! 3. Locale (`LC_ALL`, `LC_MONETARY`, `LANG`) for the currency code
//! 4. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use wesplit_core::{CurrencyCode, PeopleCount, SplitInputs, TipPercentage};

/// Environment variable naming an explicit currency code.
pub const CURRENCY_VAR: &str = "WESPLIT_CURRENCY";
/// Environment variable for the starting tip percentage.
pub const DEFAULT_TIP_VAR: &str = "WESPLIT_DEFAULT_TIP";
/// Environment variable for the starting number of people.
pub const DEFAULT_PEOPLE_VAR: &str = "WESPLIT_DEFAULT_PEOPLE";

/// Locale variables in lookup order; the first non-empty one wins.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Region to currency table for locale detection.
const REGION_CURRENCIES: &[(&str, &str)] = &[
    ("US", "USD"),
    ("CA", "CAD"),
    ("MX", "MXN"),
    ("BR", "BRL"),
    ("GB", "GBP"),
    ("IE", "EUR"),
    ("DE", "EUR"),
    ("FR", "EUR"),
    ("ES", "EUR"),
    ("IT", "EUR"),
    ("NL", "EUR"),
    ("BE", "EUR"),
    ("AT", "EUR"),
    ("PT", "EUR"),
    ("FI", "EUR"),
    ("CH", "CHF"),
    ("SE", "SEK"),
    ("NO", "NOK"),
    ("DK", "DKK"),
    ("PL", "PLN"),
    ("JP", "JPY"),
    ("KR", "KRW"),
    ("CN", "CNY"),
    ("IN", "INR"),
    ("PK", "PKR"),
    ("AU", "AUD"),
    ("NZ", "NZD"),
    ("ZA", "ZAR"),
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Currency code handed to the formatter
    pub currency: CurrencyCode,

    /// Tip percentage a session starts with
    pub default_tip: TipPercentage,

    /// Number of people a session starts with
    pub default_people: PeopleCount,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Currency: USD
    /// - Tip: 20%
    /// - People: 2
    fn default() -> Self {
        AppConfig {
            currency: CurrencyCode::default(),
            default_tip: TipPercentage::default(),
            default_people: PeopleCount::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `WESPLIT_CURRENCY`: Override the locale currency (e.g., "EUR")
    /// - `WESPLIT_DEFAULT_TIP`: Starting tip percentage (0-100)
    /// - `WESPLIT_DEFAULT_PEOPLE`: Starting number of people (2-99)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(code) = value(CURRENCY_VAR) {
            config.currency = CurrencyCode::new(&code).map_err(|e| ConfigError::InvalidValue {
                key: CURRENCY_VAR.to_string(),
                reason: e.to_string(),
            })?;
        } else if let Some(code) = LOCALE_VARS
            .iter()
            .find_map(|key| value(*key))
            .and_then(|locale| currency_for_locale(&locale))
        {
            config.currency = code;
        }

        if let Some(raw) = value(DEFAULT_TIP_VAR) {
            let pct = parse_whole_number(DEFAULT_TIP_VAR, &raw)?;
            config.default_tip = TipPercentage::new(pct).map_err(|e| ConfigError::InvalidValue {
                key: DEFAULT_TIP_VAR.to_string(),
                reason: e.to_string(),
            })?;
        }

        if let Some(raw) = value(DEFAULT_PEOPLE_VAR) {
            let count = parse_whole_number(DEFAULT_PEOPLE_VAR, &raw)?;
            config.default_people =
                PeopleCount::new(count).map_err(|e| ConfigError::InvalidValue {
                    key: DEFAULT_PEOPLE_VAR.to_string(),
                    reason: e.to_string(),
                })?;
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Session inputs these defaults describe, with a zero check amount.
    pub fn initial_inputs(&self) -> SplitInputs {
        SplitInputs {
            tip_percentage: self.default_tip,
            people: self.default_people,
            ..SplitInputs::default()
        }
    }
}

/// Maps a POSIX locale name such as `en_US.UTF-8` to its region's currency.
///
/// Returns `None` for `C`, `POSIX`, and regions missing from the table; the
/// caller then keeps the USD default.
pub fn currency_for_locale(locale: &str) -> Option<CurrencyCode> {
    let name = locale.split(['.', '@']).next()?;
    let region = name.split(['_', '-']).nth(1)?.to_ascii_uppercase();

    REGION_CURRENCIES
        .iter()
        .find(|(r, _)| *r == region)
        .and_then(|(_, code)| CurrencyCode::new(code).ok())
}

fn parse_whole_number(key: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: format!("'{}' is not a whole number", raw.trim()),
    })
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency.as_str(), "USD");
    }

    #[test]
    fn test_locale_detection() {
        assert_eq!(currency_for_locale("en_GB.UTF-8").unwrap().as_str(), "GBP");
        assert_eq!(currency_for_locale("de_DE@euro").unwrap().as_str(), "EUR");
        assert_eq!(currency_for_locale("ur-PK").unwrap().as_str(), "PKR");
        assert!(currency_for_locale("C").is_none());
        assert!(currency_for_locale("POSIX").is_none());
        assert!(currency_for_locale("xx_ZZ.UTF-8").is_none());
    }

    #[test]
    fn test_locale_precedence() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LC_ALL", ""),
            ("LC_MONETARY", "ja_JP.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]))
        .unwrap();
        assert_eq!(config.currency.as_str(), "JPY");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_usd() {
        let config = AppConfig::from_lookup(lookup(&[("LANG", "C.UTF-8")])).unwrap();
        assert_eq!(config.currency.as_str(), "USD");
    }

    #[test]
    fn test_explicit_currency_beats_locale() {
        let config = AppConfig::from_lookup(lookup(&[
            ("WESPLIT_CURRENCY", "chf"),
            ("LANG", "en_GB.UTF-8"),
        ]))
        .unwrap();
        assert_eq!(config.currency.as_str(), "CHF");
    }

    #[test]
    fn test_default_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("WESPLIT_DEFAULT_TIP", "15"),
            ("WESPLIT_DEFAULT_PEOPLE", " 6 "),
        ]))
        .unwrap();
        assert_eq!(config.default_tip.points(), 15);
        assert_eq!(config.default_people.get(), 6);

        let inputs = config.initial_inputs();
        assert_eq!(inputs.tip_percentage.points(), 15);
        assert_eq!(inputs.people.get(), 6);
        assert_eq!(inputs.check_amount.value(), 0.0);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[("WESPLIT_DEFAULT_TIP", "lots")])).unwrap_err();
        assert!(err.to_string().contains("WESPLIT_DEFAULT_TIP"));

        let err = AppConfig::from_lookup(lookup(&[("WESPLIT_DEFAULT_TIP", "250")])).unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));

        let err = AppConfig::from_lookup(lookup(&[("WESPLIT_DEFAULT_PEOPLE", "1")])).unwrap_err();
        assert!(err.to_string().contains("WESPLIT_DEFAULT_PEOPLE"));

        assert!(AppConfig::from_lookup(lookup(&[("WESPLIT_CURRENCY", "euro")])).is_err());
    }
}
