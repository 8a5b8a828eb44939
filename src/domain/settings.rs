//! Operator-supplied settings for the payment method.
//!
//! Parsing is lenient so that a half-edited configuration can still be
//! loaded and described; [`Settings::validate`] is what reports problems.
//! Typed accessors fail on values `validate` would have flagged.

use {
    super::error::AdapterError,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

pub const PAY: &str = "Pay";
pub const USE_SETUP: &str = "UseSetup";
pub const CURRENCIES: &str = "Currencies";

pub const PAY_ERROR: &str = "'Pay' needs to be set to either 'true' or 'false'.";
pub const USE_SETUP_ERROR: &str = "'Use setup' needs to be set to either 'true' or 'false'.";
pub const CURRENCIES_ERROR: &str = "'Supported currencies' are not in correct format. \
Every code is supposed to be three letters long. Codes should be separated by ','.";

/// One entry of the settings screen the host renders for operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    pub id: String,
    pub display_name: String,
    pub help_text: String,
}

impl SettingsField {
    fn new(id: &str, display_name: &str, help_text: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            help_text: help_text.to_string(),
        }
    }
}

/// Immutable snapshot of the raw settings map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    raw: HashMap<String, String>,
}

impl Settings {
    pub fn parse(raw: HashMap<String, String>) -> Self {
        Self { raw }
    }

    pub fn description() -> Vec<SettingsField> {
        vec![
            SettingsField::new(
                PAY,
                "Pay",
                "'true' to instantly mark order as 'Paid', 'false' to cancel payment.",
            ),
            SettingsField::new(USE_SETUP, "Use setup", "'true' to display the setup form."),
            SettingsField::new(
                CURRENCIES,
                "Supported currencies",
                "Comma separated list of currency codes that this plugin claims to support.",
            ),
        ]
    }

    fn raw(&self, key: &str) -> Result<&str, AdapterError> {
        self.raw
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AdapterError::Configuration(format!("missing setting: {key}")))
    }

    fn flag(&self, key: &str) -> Result<bool, AdapterError> {
        parse_flag(self.raw(key)?)
            .ok_or_else(|| AdapterError::Format(format!("{key} must be 'true' or 'false'")))
    }

    /// Whether the simulated portal accepts the payment.
    pub fn pay(&self) -> Result<bool, AdapterError> {
        self.flag(PAY)
    }

    pub fn use_setup(&self) -> Result<bool, AdapterError> {
        self.flag(USE_SETUP)
    }

    /// Currency codes in configured order. Empty entries are kept.
    pub fn supported_currencies(&self) -> Result<Vec<&str>, AdapterError> {
        Ok(split_currencies(self.raw(CURRENCIES)?).collect())
    }

    pub fn supports_currency(&self, code: &str) -> Result<bool, AdapterError> {
        Ok(split_currencies(self.raw(CURRENCIES)?).any(|c| c == code))
    }

    /// Describes every problem with the raw values. Never fails.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.raw.get(PAY).and_then(|v| parse_flag(v)).is_none() {
            errors.push(PAY_ERROR.to_string());
        }

        if self.raw.get(USE_SETUP).and_then(|v| parse_flag(v)).is_none() {
            errors.push(USE_SETUP_ERROR.to_string());
        }

        let currencies_ok = self
            .raw
            .get(CURRENCIES)
            .is_some_and(|v| split_currencies(v).all(|c| matches!(c.chars().count(), 0 | 3)));
        if !currencies_ok {
            errors.push(CURRENCIES_ERROR.to_string());
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn split_currencies(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim)
}
