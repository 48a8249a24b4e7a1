//! JSON wire form: `{ "amount": "<minor units>", "currency": "<code>" }`.
//!
//! The amount is written as a string so large values never pass through a
//! floating-point number on the way to or from storage.
//!
//! The record carries the code only. Decoding takes the exponent from a
//! registry, so a value built with a hand-made [`Currency`] round-trips only
//! through a registry that defines the same exponent for its code.
//!
//! [`Currency`]: centavo_shared::Currency

use centavo_shared::{MoneyError, MoneyResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

use super::Money;
use crate::currency::CurrencyRegistry;

/// Serialized money record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Integer count of minor units, in decimal text.
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    /// Currency code.
    pub currency: String,
}

/// Accepts the amount as a JSON string or a JSON integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Integer(i64),
}

fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Text(text) => text,
        AmountRepr::Integer(value) => value.to_string(),
    })
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount.to_string(),
            currency: money.currency.code().to_string(),
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::from_record(&record, CurrencyRegistry::global())
    }
}

/// Parses a minor-unit count, accepting only its canonical `i64` rendering.
fn canonical_amount(text: &str) -> MoneyResult<i64> {
    text.parse::<i64>()
        .ok()
        .filter(|amount| amount.to_string() == text)
        .ok_or_else(|| {
            MoneyError::invalid_amount(format!(
                "{text:?} is not a canonical integer count of minor units"
            ))
        })
}

impl Money {
    /// Rebuilds a value from a record, resolving its code in `registry`.
    pub fn from_record(record: &MoneyRecord, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let currency = registry.currency(&record.currency)?;
        Self::from_minor_units_in(canonical_amount(&record.amount)?, currency)
    }

    /// Serializes to the wire record as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "amount": self.amount.to_string(),
            "currency": self.currency.code().as_str(),
        })
    }

    /// Serializes to compact JSON text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Rebuilds a value from a wire record, resolving the code globally.
    ///
    /// Every decoding failure, including unknown currencies, is reported as
    /// `InvalidAmount`.
    pub fn from_json(value: &Value) -> MoneyResult<Self> {
        Self::deserialize(value).map_err(|e| MoneyError::invalid_amount(e.to_string()))
    }

    /// Rebuilds a value from a wire record, resolving the code in `registry`.
    pub fn from_json_with(value: &Value, registry: &CurrencyRegistry) -> MoneyResult<Self> {
        let record = MoneyRecord::deserialize(value)
            .map_err(|e| MoneyError::invalid_amount(e.to_string()))?;
        Self::from_record(&record, registry)
            .map_err(|e| MoneyError::invalid_amount(e.to_string()))
    }

    /// Rebuilds a value from JSON text.
    pub fn from_json_str(text: &str) -> MoneyResult<Self> {
        serde_json::from_str(text).map_err(|e| MoneyError::invalid_amount(e.to_string()))
    }
}
