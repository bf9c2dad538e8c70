use arenasim_core::wall_clock_seed;
use serde::{Deserialize, Serialize};

/// How each trial of a bulk run picks its seed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every trial reuses this exact seed, so every trial plays out the same.
    Fixed(u64),
    /// Trial `i` uses `base + i` (wrapping).
    Sequential(u64),
    /// Every trial seeds itself from the wall clock. Not reproducible, and
    /// trials started within the same millisecond share a seed.
    WallClock,
}

impl SeedPolicy {
    /// Explicit seed for trial `index`, or `None` when the wall clock decides.
    pub fn seed_for(&self, index: u32) -> Option<u64> {
        match *self {
            SeedPolicy::Fixed(seed) => Some(seed),
            SeedPolicy::Sequential(base) => Some(base.wrapping_add(u64::from(index))),
            SeedPolicy::WallClock => None,
        }
    }
}

pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(wall_clock_seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_map_trial_indices() {
        assert_eq!(SeedPolicy::Fixed(9).seed_for(0), Some(9));
        assert_eq!(SeedPolicy::Fixed(9).seed_for(5), Some(9));
        assert_eq!(SeedPolicy::Sequential(9).seed_for(5), Some(14));
        assert_eq!(SeedPolicy::Sequential(u64::MAX).seed_for(1), Some(0));
        assert_eq!(SeedPolicy::WallClock.seed_for(3), None);
        assert_eq!(resolve_seed(Some(77)), 77);
    }
}
