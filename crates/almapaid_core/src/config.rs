//! Deployment settings.
//!
//! # Responsibility
//! - Load gateway/bank credentials and the billing mode from a TOML
//!   settings file.
//!
//! # Invariants
//! - Exactly one billing mode is active per deployment; the two modes
//!   are never merged.
//! - Missing gateway or bank entries degrade to "link unavailable" at
//!   render time, they are not configuration errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Full deployment settings, mirroring the settings file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub bank: BankSettings,
    pub billing: BillingMode,
}

/// Payment-gateway credentials and the public URL the gateway redirects
/// back to after checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewaySettings {
    pub access_token: Option<String>,
    pub base_url: Option<String>,
}

/// Bank deep-link settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankSettings {
    /// CBU alias the deep-link credits.
    pub cbu_alias: Option<String>,
}

/// Deployment-wide surcharge mode.
///
/// ```toml
/// [billing]
/// mode = "daily_percent"
/// ```
/// or
/// ```toml
/// [billing]
/// mode = "flat_cutoff"
/// cutoff = "2025-06-10"
/// surcharge = "2000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BillingMode {
    /// Per-enrollment percentage surcharge per day overdue (Mode A).
    DailyPercent,
    /// One flat surcharge over the period subtotal once `cutoff` is
    /// reached (Mode B).
    FlatCutoff {
        cutoff: NaiveDate,
        surcharge: Decimal,
    },
}

/// Settings loading/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings file: {err}"),
            Self::Parse(err) => write!(f, "cannot parse settings file: {err}"),
            Self::Invalid(message) => write!(f, "invalid settings: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway: GatewaySettings::default(),
            bank: BankSettings::default(),
            billing: BillingMode::DailyPercent,
        }
    }
}

impl Settings {
    /// Checks cross-field invariants after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let BillingMode::FlatCutoff { surcharge, .. } = &self.billing {
            if *surcharge < Decimal::ZERO {
                return Err(ConfigError::Invalid(format!(
                    "flat surcharge must not be negative, got {surcharge}"
                )));
            }
        }
        Ok(())
    }
}

/// Reads and validates settings from a TOML file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}

/// Parses and validates settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(text)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::{parse_settings, BillingMode};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_flat_cutoff_deployment() {
        let settings = parse_settings(
            r#"
            [gateway]
            access_token = "TEST-TOKEN"
            base_url = "https://pagos.example"

            [bank]
            cbu_alias = "alma.pagos"

            [billing]
            mode = "flat_cutoff"
            cutoff = "2025-06-10"
            surcharge = "2000"
            "#,
        )
        .unwrap();

        assert_eq!(settings.gateway.base_url.as_deref(), Some("https://pagos.example"));
        assert_eq!(settings.bank.cbu_alias.as_deref(), Some("alma.pagos"));
        assert_eq!(
            settings.billing,
            BillingMode::FlatCutoff {
                cutoff: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
                surcharge: dec!(2000),
            }
        );
    }

    #[test]
    fn gateway_and_bank_sections_are_optional() {
        let settings = parse_settings("[billing]\nmode = \"daily_percent\"\n").unwrap();
        assert!(settings.gateway.access_token.is_none());
        assert!(settings.bank.cbu_alias.is_none());
        assert_eq!(settings.billing, BillingMode::DailyPercent);
    }

    #[test]
    fn negative_flat_surcharge_is_rejected() {
        let err = parse_settings(
            "[billing]\nmode = \"flat_cutoff\"\ncutoff = \"2025-06-10\"\nsurcharge = \"-5\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn unparsable_cutoff_date_is_a_parse_error() {
        let err = parse_settings(
            "[billing]\nmode = \"flat_cutoff\"\ncutoff = \"junk\"\nsurcharge = \"5\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("parse"));
    }
}
