//! Fixed phrasing pools used by the personas.
//!
//! Each pool lists interchangeable variants for one section of a reply.
//! Sections with interpolated numbers are built in the persona modules.

// MEME SAGE

pub const MEME_REFUSALS: &[&str] = &[
    "🚫 I can't give you direct picks, but here's the safe process:",
    "⚠️ I don't make direct buy recommendations, but I'll guide you with the framework:",
    "🔒 I don't give trading signals, but here's how to evaluate it yourself:",
];

pub const MEME_QUICK_READS: &[&str] = &[
    "📊 **Quick read:**\n\
     • Extreme volatility expected\n\
     • Narrative > fundamentals in memes\n\
     • Timing is everything",
    "⚡ **Quick read:**\n\
     • High risk / high reward\n\
     • Liquidity can disappear fast\n\
     • FOMO kills portfolios",
    "🎯 **Quick read:**\n\
     • Momentum is key\n\
     • Community strength > tokenomics\n\
     • Exit strategy before entering",
];

pub const MEME_CHECKLISTS: &[&str] = &["✅ **Pre-entry checklist:**\n\
     • Liquidity: Minimum 10x your position?\n\
     • Volume: 24h > $500k?\n\
     • Narrative: Is it alive or dead?\n\
     • Holders: Concentration < 20% in top 10?\n\
     • Unlock risks: Upcoming unlocks in 7 days?\n\
     • Chart: Breakout or pump & dump?"];

pub const MEME_QUESTIONS: &[&str] = &[
    "❓ **Questions to refine:**\n\
     • What % of bankroll do you want to risk?\n\
     • What's your horizon (scalp/swing/hold)?\n\
     • Have you reviewed the unlock schedule?",
    "💭 **Food for thought:**\n\
     • Why this meme and not another?\n\
     • What's your edge in this trade?\n\
     • What would make you exit early?",
];

/// Closing block of every MEME SAGE refusal.
pub const MEME_REFUSAL_QUESTIONS: &str = "**Questions to refine:**\n\
     - What % of your bankroll are you willing to risk?\n\
     - What's your time horizon (scalp, swing, hold)?\n\
     - Have you reviewed the token's unlock schedule?";

pub const MEME_PITCH: &str = "I'm here to help you navigate the meme world with a solid risk \
     framework. What would you like to know?";

// EDGE CALCULATOR

pub const CASINO_ANTI_TILT: &[&str] = &[
    "🧘 **Anti-tilt check:**\n\
     • Are you emotional? → STOP\n\
     • Lost 3 in a row? → Take 5 min\n\
     • Are you \"chasing losses\"? → CLOSE SESSION",
    "⚖️ **Keep a cool head:**\n\
     • Losses are normal (house edge)\n\
     • Don't increase bets after losing\n\
     • If you feel pressure, stop and breathe",
];

pub const CASINO_REFUSAL_OPENING: &str =
    "🚫 I can't give you exact numbers or tell you \"all-in\", but here's the safe process:";

pub const CASINO_REFUSAL_CLOSING: &str = "**Remember:**\n\
     • The house always has an advantage\n\
     • No system guarantees profits\n\
     • Only play with money you can afford to lose\n\
     \n\
     What specific game do you want to analyze?";

pub const CASINO_PITCH: &str = "I'm here to help you understand probabilities and manage your \
     bankroll responsibly. What game are you interested in?";
