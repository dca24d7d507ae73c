use std::sync::Arc;

use edgesage_models::{AgentContext, RiskLevel};
use rust_decimal::Decimal;
use tracing::debug;

use crate::intent::classify;
use crate::persona::{money, percent_of, Persona};
use crate::selector::{pick, TemplateSelector};
use crate::templates::{
    MEME_CHECKLISTS, MEME_PITCH, MEME_QUESTIONS, MEME_QUICK_READS, MEME_REFUSALS,
    MEME_REFUSAL_QUESTIONS,
};

pub const MEME_SAGE_ID: &str = "memes";

/// Crypto-native meme coin advisor. Gives a risk framework, never a pick.
pub struct MemeSage {
    selector: Arc<dyn TemplateSelector>,
}

impl MemeSage {
    pub fn new(selector: Arc<dyn TemplateSelector>) -> Self {
        Self { selector }
    }

    /// Max position size as a percent of bankroll.
    pub fn max_position_percent(risk_level: RiskLevel) -> Decimal {
        match risk_level {
            RiskLevel::Low => Decimal::from(2),
            RiskLevel::Medium => Decimal::from(5),
            RiskLevel::High => Decimal::from(10),
        }
    }

    fn refusal(&self, context: &AgentContext) -> String {
        let preamble = pick(self.selector.as_ref(), MEME_REFUSALS);
        let max_position = Self::max_position_percent(context.risk_level());

        format!(
            "{preamble}\n\n\
             **Safe process:**\n\
             1. Define your max position ({max_position}% of bankroll)\n\
             2. Verify minimum liquidity 10x your entry\n\
             3. Set stop-loss at -30% and staggered take-profit\n\
             4. Only enter if you pass the complete checklist\n\n\
             {MEME_REFUSAL_QUESTIONS}"
        )
    }

    pub(crate) fn risk_plan(context: &AgentContext) -> String {
        let max_position = Self::max_position_percent(context.risk_level());
        let suggested = percent_of(context.bankroll(), max_position);

        format!(
            "🎲 **Risk plan:**\n\
             • Max position: {max_position}% of bankroll (${})\n\
             • Invalidation: If it drops -30% or narrative dies\n\
             • Exit: Staggered take-profit (50% at +50%, 30% at +100%, 20% at +200%)\n\
             • Stop-loss: ALWAYS active",
            money(suggested)
        )
    }
}

impl Persona for MemeSage {
    fn id(&self) -> &str {
        MEME_SAGE_ID
    }

    fn name(&self) -> &str {
        "MEME SAGE"
    }

    fn system_style(&self) -> &str {
        "crypto-native, fun, direct"
    }

    fn pitch(&self) -> &str {
        MEME_PITCH
    }

    fn respond(&self, user_text: &str, context: &AgentContext) -> String {
        let intent = classify(user_text);
        if intent.direct_pick_requested {
            debug!(persona = MEME_SAGE_ID, keywords = ?intent.matched_keywords, "Direct pick requested, refusing");
            return self.refusal(context);
        }

        let selector = self.selector.as_ref();
        let quick_read = pick(selector, MEME_QUICK_READS);
        let checklist = pick(selector, MEME_CHECKLISTS);
        let risk_plan = Self::risk_plan(context);
        let questions = pick(selector, MEME_QUESTIONS);

        format!("{quick_read}\n\n{checklist}\n\n{risk_plan}\n\n{questions}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FixedSelector;
    use rust_decimal_macros::dec;

    fn sage(index: usize) -> MemeSage {
        MemeSage::new(Arc::new(FixedSelector(index)))
    }

    fn context(bankroll: Decimal, risk_level: RiskLevel) -> AgentContext {
        AgentContext::default()
            .with_bankroll(bankroll)
            .unwrap()
            .with_risk_level(risk_level)
    }

    #[test]
    fn position_table_covers_every_tier() {
        assert_eq!(MemeSage::max_position_percent(RiskLevel::Low), dec!(2));
        assert_eq!(MemeSage::max_position_percent(RiskLevel::Medium), dec!(5));
        assert_eq!(MemeSage::max_position_percent(RiskLevel::High), dec!(10));
    }

    #[test]
    fn medium_tier_default_bankroll_suggests_fifty() {
        let reply = sage(0).respond("what should I check first?", &AgentContext::default());
        assert!(reply.contains("• Max position: 5% of bankroll ($50.00)"));
    }

    #[test]
    fn risk_plan_scales_with_bankroll_and_tier() {
        let low = MemeSage::risk_plan(&context(dec!(1000), RiskLevel::Low));
        assert!(low.contains("2% of bankroll ($20.00)"));

        let high = MemeSage::risk_plan(&context(dec!(2500), RiskLevel::High));
        assert!(high.contains("10% of bankroll ($250.00)"));

        let odd = MemeSage::risk_plan(&context(dec!(333.33), RiskLevel::Medium));
        assert!(odd.contains("5% of bankroll ($16.67)"));
    }

    #[test]
    fn structured_reply_has_four_sections_in_order() {
        let reply = sage(0).respond("thoughts on this meme launch?", &AgentContext::default());
        let sections: Vec<&str> = reply.split("\n\n").collect();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], MEME_QUICK_READS[0]);
        assert_eq!(sections[1], MEME_CHECKLISTS[0]);
        assert!(sections[2].starts_with("🎲 **Risk plan:**"));
        assert_eq!(sections[3], MEME_QUESTIONS[0]);
    }

    #[test]
    fn selector_chooses_variants() {
        let reply = sage(1).respond("thoughts on this meme launch?", &AgentContext::default());
        assert!(reply.starts_with(MEME_QUICK_READS[1]));
        assert!(reply.ends_with(MEME_QUESTIONS[1]));
    }

    #[test]
    fn direct_pick_gets_refusal() {
        let reply = sage(2).respond("Which coin should I buy?", &AgentContext::default());
        assert!(reply.starts_with(MEME_REFUSALS[2]));
        assert!(reply.contains("1. Define your max position (5% of bankroll)"));
        assert!(reply.ends_with(MEME_REFUSAL_QUESTIONS));
        assert!(!reply.contains("**Risk plan:**"));
    }

    #[test]
    fn refusal_uses_context_tier() {
        let reply = sage(0).respond("all in?", &context(dec!(1000), RiskLevel::High));
        assert!(reply.contains("(10% of bankroll)"));
    }

    #[test]
    fn extreme_bankroll_does_not_overflow() {
        let context = AgentContext {
            bankroll: Some(Decimal::MAX),
            risk_level: Some(RiskLevel::High),
            messages: vec![],
        };
        let reply = sage(0).respond("is this launch legit?", &context);
        assert!(reply.contains("• Max position: 10% of bankroll ($"));
    }

    #[test]
    fn welcome_mentions_name() {
        let welcome = sage(0).welcome_message();
        assert!(welcome.starts_with("👋 Hi, I'm MEME SAGE."));
        assert!(welcome.contains("meme world"));
    }
}
