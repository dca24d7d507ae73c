use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown risk level: {0} (expected low, medium or high)")]
    InvalidRiskLevel(String),

    #[error("Bankroll must not be negative, got {0}")]
    NegativeBankroll(Decimal),

    #[error("Bankroll {0} exceeds the supported maximum of {1}")]
    BankrollTooLarge(Decimal, Decimal),
}
