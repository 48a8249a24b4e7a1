//! Locale-aware display of money.
//!
//! Purely presentational. Rendering starts from [`Money::to_decimal`] and only
//! rearranges its digits; it never does arithmetic of its own.

use centavo_shared::CurrencyConfig;
use tracing::debug;

use crate::currency::CurrencyRegistry;
use crate::money::Money;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Before,
    /// `1,00 €`
    After,
}

/// Number and symbol conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 style tag, e.g. `pt-BR`.
    pub tag: String,
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
    /// Thousands separator, if any.
    pub group_separator: Option<char>,
    /// Digits per group.
    pub group_size: usize,
    /// Symbol placement.
    pub symbol_position: SymbolPosition,
    /// Whether a space separates symbol and number.
    pub symbol_spacing: bool,
}

impl Locale {
    fn preset(
        tag: &str,
        decimal_separator: char,
        group_separator: char,
        symbol_position: SymbolPosition,
        symbol_spacing: bool,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            decimal_separator,
            group_separator: Some(group_separator),
            group_size: 3,
            symbol_position,
            symbol_spacing,
        }
    }

    /// `$1,234.56`
    #[must_use]
    pub fn en_us() -> Self {
        Self::preset("en-US", '.', ',', SymbolPosition::Before, false)
    }

    /// `£1,234.56`
    #[must_use]
    pub fn en_gb() -> Self {
        Self::preset("en-GB", '.', ',', SymbolPosition::Before, false)
    }

    /// `R$ 1.234,56`
    #[must_use]
    pub fn pt_br() -> Self {
        Self::preset("pt-BR", ',', '.', SymbolPosition::Before, true)
    }

    /// `1.234,56 €`
    #[must_use]
    pub fn de_de() -> Self {
        Self::preset("de-DE", ',', '.', SymbolPosition::After, true)
    }

    /// `1 234,56 €` with a narrow no-break space between groups.
    #[must_use]
    pub fn fr_fr() -> Self {
        Self::preset("fr-FR", ',', '\u{202f}', SymbolPosition::After, true)
    }

    /// `1.234,56 €`
    #[must_use]
    pub fn es_es() -> Self {
        Self::preset("es-ES", ',', '.', SymbolPosition::After, true)
    }

    /// `¥1,235`
    #[must_use]
    pub fn ja_jp() -> Self {
        Self::preset("ja-JP", '.', ',', SymbolPosition::Before, false)
    }

    /// Resolves a tag such as `pt-BR`, `pt_br` or `de`; unknown tags fall
    /// back to `en-US`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Self::en_us(),
            "en-gb" => Self::en_gb(),
            "pt-br" | "pt" => Self::pt_br(),
            "de-de" | "de" => Self::de_de(),
            "fr-fr" | "fr" => Self::fr_fr(),
            "es-es" | "es" => Self::es_es(),
            "ja-jp" | "ja" => Self::ja_jp(),
            _ => {
                debug!(tag, "Unknown locale, falling back to en-US");
                Self::en_us()
            }
        }
    }
}

impl Locale {
    /// Resolves the configured default locale tag.
    #[must_use]
    pub fn from_config(config: &CurrencyConfig) -> Self {
        Self::from_tag(&config.default_locale)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Money {
    /// Renders for humans using symbols from the global registry.
    ///
    /// # Example
    ///
    /// ```
    /// use centavo_core::{Locale, Money};
    ///
    /// let money = Money::of("-1234.5", "BRL").unwrap();
    /// assert_eq!(money.format(&Locale::pt_br()), "-R$ 1.234,50");
    /// ```
    #[must_use]
    pub fn format(&self, locale: &Locale) -> String {
        self.format_with(locale, CurrencyRegistry::global())
    }

    /// Renders in the global registry's default locale.
    #[must_use]
    pub fn format_default(&self) -> String {
        let registry = CurrencyRegistry::global();
        self.format_with(&registry.default_locale(), registry)
    }

    /// Renders for humans using symbols from `registry`, falling back to the
    /// currency code.
    #[must_use]
    pub fn format_with(&self, locale: &Locale, registry: &CurrencyRegistry) -> String {
        let decimal = self.absolute().to_decimal();
        let (integer, fraction) = match decimal.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (decimal.as_str(), None),
        };

        let mut number = group_digits(integer, locale.group_separator, locale.group_size);
        if let Some(fraction) = fraction {
            number.push(locale.decimal_separator);
            number.push_str(fraction);
        }

        let code = self.currency_code();
        let symbol = registry.symbol(code).unwrap_or(code.as_str());
        let space = if locale.symbol_spacing { " " } else { "" };
        let body = match locale.symbol_position {
            SymbolPosition::Before => format!("{symbol}{space}{number}"),
            SymbolPosition::After => format!("{number}{space}{symbol}"),
        };

        if self.is_negative() {
            format!("-{body}")
        } else {
            body
        }
    }
}

fn group_digits(digits: &str, separator: Option<char>, size: usize) -> String {
    let Some(separator) = separator.filter(|_| size > 0) else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / size);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
