use std::collections::BTreeSet;

use edgesage_models::IntentClassification;

/// Phrases that mark a request for a direct pick: an exact number, an all-in,
/// a buy-now, a guarantee, a bet, or a specific coin/token/ticker.
///
/// Spanish synonyms are kept alongside the English ones.
pub const DIRECT_PICK_KEYWORDS: &[&str] = &[
    "numero exacto",
    "número exacto",
    "exact number",
    "all-in",
    "all in",
    "todo",
    "compra",
    "buy",
    "comprar",
    "ahora",
    "now",
    "inmediato",
    "garantiza",
    "guarantee",
    "ticker",
    "coin",
    "token",
    "apuesta",
    "bet",
    "apostar",
];

/// Classify a raw user message by substring containment on its lower-cased form.
///
/// Deliberately coarse: "know" matches "now", "bitcoin" matches "coin". A false
/// positive only downgrades the reply to the refusal template.
pub fn classify(text: &str) -> IntentClassification {
    let lower = text.to_lowercase();
    let matched: BTreeSet<&'static str> = DIRECT_PICK_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect();
    IntentClassification::from_matches(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_question_is_not_a_pick() {
        let intent = classify("What should I check before entering a meme launch?");
        assert!(!intent.direct_pick_requested);
        assert!(intent.matched_keywords.is_empty());
    }

    #[test]
    fn case_insensitive_match() {
        let intent = classify("Should I go ALL-IN on this?");
        assert!(intent.direct_pick_requested);
        assert!(intent.matched_keywords.contains("all-in"));
    }

    #[test]
    fn collects_every_match() {
        let intent = classify("buy the token now");
        let expected: BTreeSet<&str> = ["buy", "token", "now"].into_iter().collect();
        assert_eq!(intent.matched_keywords, expected);
    }

    #[test]
    fn spanish_synonyms() {
        assert!(classify("dame el número exacto").direct_pick_requested);
        assert!(classify("¿cuánto apuesto ahora?").direct_pick_requested);
        assert!(classify("¿me lo garantizas?").direct_pick_requested);
    }

    #[test]
    fn over_inclusive_substrings() {
        // "know" contains "now"; accepted as a conservative false positive.
        assert!(classify("I want to know more").direct_pick_requested);
        assert!(classify("thoughts on bitcoin").direct_pick_requested);
    }

    #[test]
    fn keyword_list_has_no_duplicates() {
        let unique: BTreeSet<&str> = DIRECT_PICK_KEYWORDS.iter().copied().collect();
        assert_eq!(unique.len(), DIRECT_PICK_KEYWORDS.len());
    }
}
