//! Money error types.
//!
//! Every failing money operation reports exactly one of these kinds. Values are
//! immutable, so a rejected operation never leaves anything half-applied.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operands of a binary or aggregate operation carry different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand (or first) operand.
        left: CurrencyCode,
        /// Currency of the offending operand.
        right: CurrencyCode,
    },

    /// Malformed amount, bad allocation weights, empty aggregate or bad record.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Division by a zero divisor or by an empty collection's count.
    #[error("Division by zero")]
    DivisionByZero,

    /// Currency code is malformed or not present in the registry in use.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Currency declares a minor-unit exponent outside the supported range.
    #[error("Invalid minor-unit exponent {exponent} for {code}")]
    InvalidExponent {
        /// Currency being defined.
        code: CurrencyCode,
        /// Rejected exponent.
        exponent: u32,
    },

    /// Result does not fit the representable minor-unit range.
    #[error("Amount overflow in {operation}")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },
}

impl MoneyError {
    /// Shorthand for [`MoneyError::InvalidAmount`].
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidExponent { .. } => "INVALID_EXPONENT",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
