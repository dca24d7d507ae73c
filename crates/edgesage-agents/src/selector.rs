use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which phrasing variant a persona uses for a section.
///
/// Implementations return an index in `0..pool_len`. Personas never call
/// with an empty pool.
pub trait TemplateSelector: Send + Sync {
    fn select(&self, pool_len: usize) -> usize;
}

/// Pick a template from `pool`, falling back to the first entry if the
/// selector returns an out-of-range index.
pub fn pick<'a>(selector: &dyn TemplateSelector, pool: &[&'a str]) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    let index = selector.select(pool.len());
    pool.get(index).copied().unwrap_or(pool[0])
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn select(&self, pool_len: usize) -> usize {
        if pool_len == 0 {
            return 0;
        }
        rand::rng().random_range(0..pool_len)
    }
}

/// Uniform choice from a seeded RNG. The same seed replays the same phrasing.
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TemplateSelector for SeededSelector {
    fn select(&self, pool_len: usize) -> usize {
        if pool_len == 0 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..pool_len),
            Err(poisoned) => poisoned.into_inner().random_range(0..pool_len),
        }
    }
}

/// Always the same slot, wrapped to the pool size.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&self, pool_len: usize) -> usize {
        if pool_len == 0 {
            0
        } else {
            self.0 % pool_len
        }
    }
}
