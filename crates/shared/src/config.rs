//! Currency configuration management.
//!
//! Minor-unit exponents are data. Deployments may add currencies or override
//! the built-in ISO 4217 table through a config file or the environment.

use serde::Deserialize;

/// Currency configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Currencies to add to, or override in, the built-in table.
    #[serde(default)]
    pub currencies: Vec<CurrencyEntry>,
    /// Locale tag used when callers do not pick one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

/// One configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyEntry {
    /// Three-letter currency code.
    pub code: String,
    /// Decimal places of the minor unit.
    pub minor_unit_exponent: u32,
    /// Display symbol. Falls back to the existing symbol or the code.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            currencies: Vec::new(),
            default_locale: default_locale(),
        }
    }
}

impl CurrencyConfig {
    /// Loads configuration from `config/currencies.*` and the environment.
    ///
    /// Environment variables use the `CENTAVO__` prefix, e.g.
    /// `CENTAVO__DEFAULT_LOCALE=pt-BR`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/currencies").required(false))
            .add_source(config::Environment::with_prefix("CENTAVO").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has the wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
