use edgesage_models::AgentContext;
use rust_decimal::{Decimal, RoundingStrategy};

/// A response-generation strategy. Consumers (registry, session, CLI) only
/// ever see this trait, never a concrete persona type.
pub trait Persona: Send + Sync {
    /// Registry key, e.g. `"memes"`.
    fn id(&self) -> &str;
    /// Display name, e.g. `"MEME SAGE"`.
    fn name(&self) -> &str;
    /// Free-text tone descriptor.
    fn system_style(&self) -> &str;
    /// One-paragraph introduction used in the welcome message.
    fn pitch(&self) -> &str;

    fn respond(&self, user_text: &str, context: &AgentContext) -> String;

    fn welcome_message(&self) -> String {
        format!("👋 Hi, I'm {}.\n\n{}", self.name(), self.pitch())
    }
}

/// Dollar amount with exactly two decimals, e.g. `50.00`.
pub(crate) fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// `bankroll * percent / 100`, saturating at `Decimal::MAX`.
pub(crate) fn percent_of(bankroll: Decimal, percent: Decimal) -> Decimal {
    bankroll.saturating_mul(percent) / Decimal::ONE_HUNDRED
}
