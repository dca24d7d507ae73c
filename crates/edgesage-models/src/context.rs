use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::message::Message;

/// Bankroll assumed when the caller does not supply one.
pub const DEFAULT_BANKROLL: Decimal = Decimal::ONE_THOUSAND;

/// Largest accepted bankroll (10^15 dollars). Keeps every persona product
/// well inside `Decimal` range.
pub const MAX_BANKROLL: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Check a bankroll lies in `0..=MAX_BANKROLL`.
pub fn validate_bankroll(bankroll: Decimal) -> Result<Decimal, ModelError> {
    if bankroll < Decimal::ZERO {
        return Err(ModelError::NegativeBankroll(bankroll));
    }
    if bankroll > MAX_BANKROLL {
        return Err(ModelError::BankrollTooLarge(bankroll, MAX_BANKROLL));
    }
    Ok(bankroll)
}

/// Risk appetite tier. Every persona table is keyed on all three variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(ModelError::InvalidRiskLevel(other.to_string())),
        }
    }
}

/// Per-request context handed to a persona. Rebuilt from session state on
/// every reply and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentContext {
    /// Bankroll in dollars. None = `DEFAULT_BANKROLL`.
    pub bankroll: Option<Decimal>,
    /// None = `RiskLevel::Medium`.
    pub risk_level: Option<RiskLevel>,
    /// Conversation so far, including the message being answered.
    pub messages: Vec<Message>,
}

impl AgentContext {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            bankroll: None,
            risk_level: None,
            messages,
        }
    }

    pub fn with_bankroll(mut self, bankroll: Decimal) -> Result<Self, ModelError> {
        self.bankroll = Some(validate_bankroll(bankroll)?);
        Ok(self)
    }

    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = Some(risk_level);
        self
    }

    pub fn bankroll(&self) -> Decimal {
        self.bankroll.unwrap_or(DEFAULT_BANKROLL)
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let context = AgentContext::default();
        assert_eq!(context.bankroll(), dec!(1000));
        assert_eq!(context.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn supplied_fields_win() {
        let context = AgentContext::new(vec![])
            .with_bankroll(dec!(250))
            .unwrap()
            .with_risk_level(RiskLevel::High);
        assert_eq!(context.bankroll(), dec!(250));
        assert_eq!(context.risk_level(), RiskLevel::High);
    }

    #[test]
    fn negative_bankroll_rejected() {
        let result = AgentContext::default().with_bankroll(dec!(-5));
        assert_eq!(result, Err(ModelError::NegativeBankroll(dec!(-5))));
    }

    #[test]
    fn max_bankroll_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_BANKROLL, Decimal::from(1_000_000_000_000_000_i64));
    }

    #[test]
    fn oversized_bankroll_rejected() {
        let result = AgentContext::default().with_bankroll(Decimal::MAX);
        assert_eq!(
            result,
            Err(ModelError::BankrollTooLarge(Decimal::MAX, MAX_BANKROLL))
        );
        assert!(AgentContext::default().with_bankroll(MAX_BANKROLL).is_ok());
    }

    #[test]
    fn zero_bankroll_allowed() {
        let context = AgentContext::default().with_bankroll(dec!(0)).unwrap();
        assert_eq!(context.bankroll(), dec!(0));
    }

    #[test]
    fn risk_level_parsing() {
        assert_eq!("LOW".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!(" medium ".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("high".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!(matches!(
            "yolo".parse::<RiskLevel>(),
            Err(ModelError::InvalidRiskLevel(_))
        ));
    }

    #[test]
    fn risk_level_serialization() {
        for level in RiskLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }
}
