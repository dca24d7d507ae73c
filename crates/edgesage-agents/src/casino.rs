use std::fmt;
use std::sync::Arc;

use edgesage_models::{AgentContext, RiskLevel};
use rust_decimal::Decimal;
use tracing::debug;

use crate::intent::classify;
use crate::persona::{money, percent_of, Persona};
use crate::selector::{pick, TemplateSelector};
use crate::templates::{
    CASINO_ANTI_TILT, CASINO_PITCH, CASINO_REFUSAL_CLOSING, CASINO_REFUSAL_OPENING,
};

pub const EDGE_CALCULATOR_ID: &str = "casino";

/// Hard limit quoted in every bet-sizing section.
pub const MAX_BETS_PER_SESSION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    Roulette,
    Blackjack,
    Dice,
    Slots,
    Generic,
}

/// Illustrative house edge for a game. Not derived from real rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseEdge {
    pub range: &'static str,
    pub explanation: &'static str,
}

impl GameType {
    /// First keyword hit wins; no hit means `Generic`.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("roulette") {
            GameType::Roulette
        } else if lower.contains("blackjack") || lower.contains("21") {
            GameType::Blackjack
        } else if lower.contains("dice") {
            GameType::Dice
        } else if lower.contains("slots") {
            GameType::Slots
        } else {
            GameType::Generic
        }
    }

    pub fn house_edge(&self) -> HouseEdge {
        match self {
            GameType::Roulette => HouseEdge {
                range: "2.7% (European) / 5.26% (American)",
                explanation: "Simple bet (red/black): 48.65% win chance",
            },
            GameType::Blackjack => HouseEdge {
                range: "0.5% - 2%",
                explanation: "With basic strategy: ~49% win chance per hand",
            },
            GameType::Dice => HouseEdge {
                range: "1.4% - 16.67%",
                explanation: "Depends on bet. Pass line: 1.41% house edge",
            },
            GameType::Slots => HouseEdge {
                range: "2% - 15%",
                explanation: "Varies by machine. Typical RTP: 85-98%",
            },
            GameType::Generic => HouseEdge {
                range: "1% - 5%",
                explanation: "Typical house edge in casino games",
            },
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameType::Roulette => "roulette",
            GameType::Blackjack => "blackjack",
            GameType::Dice => "dice",
            GameType::Slots => "slots",
            GameType::Generic => "generic",
        };
        f.write_str(name)
    }
}

impl HouseEdge {
    /// Dollars lost per $100 wagered: the leading number of the range.
    pub fn expected_loss_per_hundred(&self) -> &'static str {
        let before_percent = self.range.split('%').next().unwrap_or(self.range);
        before_percent.split(' ').next().unwrap_or(before_percent)
    }
}

/// Per-tier session limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub stop_loss_fraction: Decimal,
    pub stop_win_fraction: Decimal,
    pub max_duration: &'static str,
    /// Percent of bankroll per bet.
    pub bet_percent: Decimal,
}

impl SessionLimits {
    pub fn for_risk(risk_level: RiskLevel) -> Self {
        match risk_level {
            RiskLevel::Low => Self {
                stop_loss_fraction: Decimal::new(1, 1),
                stop_win_fraction: Decimal::new(15, 2),
                max_duration: "120 min",
                bet_percent: Decimal::from(1),
            },
            RiskLevel::Medium => Self {
                stop_loss_fraction: Decimal::new(2, 1),
                stop_win_fraction: Decimal::new(3, 1),
                max_duration: "90 min",
                bet_percent: Decimal::from(2),
            },
            RiskLevel::High => Self {
                stop_loss_fraction: Decimal::new(3, 1),
                stop_win_fraction: Decimal::new(5, 1),
                max_duration: "60 min",
                bet_percent: Decimal::from(5),
            },
        }
    }
}

/// Whole-number percentage for a fraction, e.g. 0.15 -> "15".
fn as_percent(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).normalize()
}

/// House-edge and bankroll-discipline advisor.
pub struct EdgeCalculator {
    selector: Arc<dyn TemplateSelector>,
}

impl EdgeCalculator {
    pub fn new(selector: Arc<dyn TemplateSelector>) -> Self {
        Self { selector }
    }

    pub(crate) fn probability_section(game: GameType) -> String {
        let edge = game.house_edge();
        format!(
            "📊 **Probability / Edge:**\n\
             • House edge: {}\n\
             • {}\n\
             • For every $100 bet, expect to lose ${} on average",
            edge.range,
            edge.explanation,
            edge.expected_loss_per_hundred()
        )
    }

    pub(crate) fn session_rule_section(context: &AgentContext) -> String {
        let bankroll = context.bankroll();
        let limits = SessionLimits::for_risk(context.risk_level());
        let stop_loss = bankroll.saturating_mul(limits.stop_loss_fraction);
        let stop_win = bankroll.saturating_mul(limits.stop_win_fraction);

        format!(
            "⏱️ **Session rule:**\n\
             • Stop-loss: -${} ({}% of bankroll)\n\
             • Stop-win: +${} ({}% of bankroll)\n\
             • Max time: {}\n\
             • If you reach either → STOP. Come back tomorrow.",
            money(stop_loss),
            as_percent(limits.stop_loss_fraction),
            money(stop_win),
            as_percent(limits.stop_win_fraction),
            limits.max_duration
        )
    }

    pub(crate) fn bet_sizing_section(context: &AgentContext) -> String {
        let limits = SessionLimits::for_risk(context.risk_level());
        let suggested = percent_of(context.bankroll(), limits.bet_percent);

        format!(
            "💰 **Bet sizing:**\n\
             • % per bet: {}% of bankroll\n\
             • Suggested size: ${}\n\
             • Never more than {}% on a single bet\n\
             • Maximum {MAX_BETS_PER_SESSION} bets per session",
            limits.bet_percent,
            money(suggested),
            limits.bet_percent * Decimal::TWO
        )
    }

    fn refusal(&self, context: &AgentContext) -> String {
        format!(
            "{CASINO_REFUSAL_OPENING}\n\n\
             **Decision framework:**\n\
             1. Calculate your bet size ({})\n\
             2. Apply session rule (stop-loss/stop-win)\n\
             3. Use basic strategy when applicable\n\
             4. Respect the time limit\n\n\
             {CASINO_REFUSAL_CLOSING}",
            Self::bet_sizing_section(context)
        )
    }
}

impl Persona for EdgeCalculator {
    fn id(&self) -> &str {
        EDGE_CALCULATOR_ID
    }

    fn name(&self) -> &str {
        "EDGE CALCULATOR"
    }

    fn system_style(&self) -> &str {
        "calm, mathematical"
    }

    fn pitch(&self) -> &str {
        CASINO_PITCH
    }

    fn respond(&self, user_text: &str, context: &AgentContext) -> String {
        let intent = classify(user_text);
        if intent.direct_pick_requested {
            debug!(persona = EDGE_CALCULATOR_ID, keywords = ?intent.matched_keywords, "Direct pick requested, refusing");
            return self.refusal(context);
        }

        let game = GameType::detect(user_text);
        debug!(persona = EDGE_CALCULATOR_ID, game = %game, "Game classified");

        let probability = Self::probability_section(game);
        let session_rule = Self::session_rule_section(context);
        let bet_sizing = Self::bet_sizing_section(context);
        let anti_tilt = pick(self.selector.as_ref(), CASINO_ANTI_TILT);

        format!("{probability}\n\n{session_rule}\n\n{bet_sizing}\n\n{anti_tilt}")
    }
}
