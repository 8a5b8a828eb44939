use {
    crate::domain::{error::AdapterError, settings},
    std::{collections::HashMap, env, net::SocketAddr},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Environment variable backing each payment method setting.
const SETTING_VARS: [(&str, &str); 3] = [
    ("INSTAPAY_PAY", settings::PAY),
    ("INSTAPAY_USE_SETUP", settings::USE_SETUP),
    ("INSTAPAY_CURRENCIES", settings::CURRENCIES),
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Raw settings for the payment method. Unset variables are left out.
    pub settings: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdapterError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| AdapterError::Configuration(format!("BIND_ADDR {bind_addr:?}: {e}")))?;

        let settings = SETTING_VARS
            .iter()
            .filter_map(|&(var, key)| lookup(var).map(|value| (key.to_string(), value)))
            .collect();

        Ok(Self {
            bind_addr,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.settings.is_empty());
    }

    #[test]
    fn maps_variables_to_setting_keys() {
        let vars = HashMap::from([
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("INSTAPAY_PAY", "true"),
            ("INSTAPAY_CURRENCIES", "USD,EUR"),
        ]);
        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.settings.get(settings::PAY).unwrap(), "true");
        assert_eq!(config.settings.get(settings::CURRENCIES).unwrap(), "USD,EUR");
        assert!(!config.settings.contains_key(settings::USE_SETUP));
    }

    #[test]
    fn bad_bind_addr_is_a_configuration_error() {
        let result = AppConfig::from_lookup(|k| (k == "BIND_ADDR").then(|| "nope".to_string()));
        assert!(matches!(result, Err(AdapterError::Configuration(_))));
    }
}
