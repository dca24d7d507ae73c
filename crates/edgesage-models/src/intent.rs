use std::collections::BTreeSet;

/// Result of keyword-based intent detection on a single user message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentClassification {
    /// True when the user asked for an exact pick, size or guarantee.
    pub direct_pick_requested: bool,
    pub matched_keywords: BTreeSet<&'static str>,
}

impl IntentClassification {
    pub fn from_matches(matched_keywords: BTreeSet<&'static str>) -> Self {
        Self {
            direct_pick_requested: !matched_keywords.is_empty(),
            matched_keywords,
        }
    }
}
