//! Test support: scripted template selectors and reply inspection helpers.
//!
//! `SequenceSelector` replays a fixed list of indices so a reply can be
//! asserted byte-for-byte instead of as "one of N variants".

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::selector::TemplateSelector;

/// Replays the scripted indices in order, then repeats the last one.
pub struct SequenceSelector {
    script: Mutex<VecDeque<usize>>,
    last: Mutex<usize>,
}

impl SequenceSelector {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(0),
        }
    }

    /// Indices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl TemplateSelector for SequenceSelector {
    fn select(&self, pool_len: usize) -> usize {
        if pool_len == 0 {
            return 0;
        }
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(index) = next {
            *last = index;
        }
        *last % pool_len
    }
}

/// Split a reply into its blank-line separated sections.
pub fn sections(reply: &str) -> Vec<&str> {
    reply.split("\n\n").collect()
}

/// True when `section` is exactly one of the entries of `pool`.
pub fn is_one_of(section: &str, pool: &[&str]) -> bool {
    pool.iter().any(|candidate| *candidate == section)
}
