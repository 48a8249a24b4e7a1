//! Currency registry: code → minor-unit exponent, symbol and name.
//!
//! The built-in table follows ISO 4217. A deployment may install its own
//! registry once at startup; every code-based constructor resolves through
//! [`CurrencyRegistry::global`].

use std::collections::BTreeMap;

use centavo_shared::{Currency, CurrencyCode, CurrencyConfig, MoneyError, MoneyResult};
use once_cell::sync::{Lazy, OnceCell};
use tracing::{info, warn};

use crate::format::Locale;

/// Display metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDefinition {
    /// Code and minor-unit exponent.
    pub currency: Currency,
    /// Display symbol, e.g. `R$`.
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
}

impl CurrencyDefinition {
    /// Creates a definition.
    pub fn new(currency: Currency, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            currency,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.currency.code()
    }
}

/// (code, exponent, symbol, name)
const ISO_4217: &[(&[u8; 3], u32, &str, &str)] = &[
    (b"AED", 2, "AED", "UAE Dirham"),
    (b"ARS", 2, "ARS", "Argentine Peso"),
    (b"AUD", 2, "A$", "Australian Dollar"),
    (b"BHD", 3, "BHD", "Bahraini Dinar"),
    (b"BRL", 2, "R$", "Brazilian Real"),
    (b"CAD", 2, "CA$", "Canadian Dollar"),
    (b"CHF", 2, "CHF", "Swiss Franc"),
    (b"CLF", 4, "CLF", "Unidad de Fomento"),
    (b"CLP", 0, "CLP", "Chilean Peso"),
    (b"CNY", 2, "CN¥", "Yuan Renminbi"),
    (b"COP", 2, "COP", "Colombian Peso"),
    (b"CZK", 2, "Kč", "Czech Koruna"),
    (b"DKK", 2, "kr.", "Danish Krone"),
    (b"EUR", 2, "€", "Euro"),
    (b"GBP", 2, "£", "Pound Sterling"),
    (b"HKD", 2, "HK$", "Hong Kong Dollar"),
    (b"HUF", 2, "Ft", "Forint"),
    (b"IDR", 2, "Rp", "Rupiah"),
    (b"ILS", 2, "₪", "New Israeli Sheqel"),
    (b"INR", 2, "₹", "Indian Rupee"),
    (b"IQD", 3, "IQD", "Iraqi Dinar"),
    (b"ISK", 0, "ISK", "Iceland Krona"),
    (b"JOD", 3, "JOD", "Jordanian Dinar"),
    (b"JPY", 0, "¥", "Yen"),
    (b"KRW", 0, "₩", "Won"),
    (b"KWD", 3, "KWD", "Kuwaiti Dinar"),
    (b"LYD", 3, "LYD", "Libyan Dinar"),
    (b"MXN", 2, "MX$", "Mexican Peso"),
    (b"NOK", 2, "kr", "Norwegian Krone"),
    (b"NZD", 2, "NZ$", "New Zealand Dollar"),
    (b"OMR", 3, "OMR", "Rial Omani"),
    (b"PEN", 2, "S/", "Sol"),
    (b"PHP", 2, "₱", "Philippine Peso"),
    (b"PLN", 2, "zł", "Zloty"),
    (b"PYG", 0, "PYG", "Guarani"),
    (b"SEK", 2, "kr", "Swedish Krona"),
    (b"SGD", 2, "S$", "Singapore Dollar"),
    (b"THB", 2, "฿", "Baht"),
    (b"TND", 3, "TND", "Tunisian Dinar"),
    (b"TRY", 2, "₺", "Turkish Lira"),
    (b"UGX", 0, "UGX", "Uganda Shilling"),
    (b"USD", 2, "$", "US Dollar"),
    (b"UYU", 2, "UYU", "Peso Uruguayo"),
    (b"UYW", 4, "UYW", "Unidad Previsional"),
    (b"VND", 0, "₫", "Dong"),
    (b"XAF", 0, "FCFA", "CFA Franc BEAC"),
    (b"XOF", 0, "F CFA", "CFA Franc BCEAO"),
    (b"ZAR", 2, "R", "Rand"),
];

static ISO: Lazy<CurrencyRegistry> = Lazy::new(CurrencyRegistry::iso);
static INSTALLED: OnceCell<CurrencyRegistry> = OnceCell::new();

/// Lookup table from currency code to definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyRegistry {
    definitions: BTreeMap<CurrencyCode, CurrencyDefinition>,
    default_locale: Option<Locale>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in ISO 4217 table.
    #[must_use]
    pub fn iso() -> Self {
        let mut registry = Self::new();
        for (code, exponent, symbol, name) in ISO_4217 {
            registry.insert(CurrencyDefinition::new(
                Currency::from_static(code, *exponent),
                *symbol,
                *name,
            ));
        }
        registry
    }

    /// Builds the ISO table with the configured additions and overrides applied.
    ///
    /// The configured `default_locale` becomes the registry's default locale.
    pub fn from_config(config: &CurrencyConfig) -> MoneyResult<Self> {
        let mut registry = Self::iso().with_default_locale(Locale::from_config(config));
        for entry in &config.currencies {
            let code = CurrencyCode::new(&entry.code)?;
            let currency = Currency::new(code, entry.minor_unit_exponent)?;
            let existing = registry.definitions.get(&code);

            if let Some(existing) = existing {
                if existing.currency.minor_unit_exponent() != entry.minor_unit_exponent {
                    warn!(
                        currency = %code,
                        builtin = existing.currency.minor_unit_exponent(),
                        configured = entry.minor_unit_exponent,
                        "Configuration overrides minor-unit exponent"
                    );
                }
            }

            let symbol = entry
                .symbol
                .clone()
                .or_else(|| existing.map(|d| d.symbol.clone()))
                .unwrap_or_else(|| code.to_string());
            let name = entry
                .name
                .clone()
                .or_else(|| existing.map(|d| d.name.clone()))
                .unwrap_or_else(|| code.to_string());

            registry.insert(CurrencyDefinition::new(currency, symbol, name));
        }

        info!(
            currencies = registry.len(),
            configured = config.currencies.len(),
            locale = %registry.default_locale().tag,
            "Currency registry loaded"
        );
        Ok(registry)
    }

    /// Sets the locale used by [`Money::format_default`].
    ///
    /// [`Money::format_default`]: crate::Money::format_default
    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Returns the default locale, `en-US` unless configured.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale.clone().unwrap_or_default()
    }

    /// Adds or replaces a definition, returning the previous one.
    pub fn insert(&mut self, definition: CurrencyDefinition) -> Option<CurrencyDefinition> {
        self.definitions.insert(definition.code(), definition)
    }

    /// Looks up the definition for a code given as text.
    pub fn definition(&self, code: &str) -> MoneyResult<&CurrencyDefinition> {
        let parsed = CurrencyCode::new(code)?;
        self.definitions
            .get(&parsed)
            .ok_or_else(|| MoneyError::UnknownCurrency(parsed.to_string()))
    }

    /// Resolves a code given as text to a [`Currency`].
    pub fn currency(&self, code: &str) -> MoneyResult<Currency> {
        self.definition(code).map(|d| d.currency)
    }

    /// Returns the display symbol for a code, if registered.
    #[must_use]
    pub fn symbol(&self, code: CurrencyCode) -> Option<&str> {
        self.definitions.get(&code).map(|d| d.symbol.as_str())
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.definitions.contains_key(&code)
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates definitions in code order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyDefinition> {
        self.definitions.values()
    }

    /// Installs the process-wide registry.
    ///
    /// Only the first call wins; later calls hand the rejected registry back.
    pub fn install(registry: Self) -> Result<(), Self> {
        let count = registry.len();
        INSTALLED.set(registry)?;
        info!(currencies = count, "Currency registry installed");
        Ok(())
    }

    /// Returns the installed registry, or the ISO table if none was installed.
    pub fn global() -> &'static Self {
        INSTALLED.get().unwrap_or_else(|| Lazy::force(&ISO))
    }
}
