use crate::SeedPolicy;
use arenasim_core::BattleType;

#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub trial_count: u32,
    pub seed: SeedPolicy,
    pub battle_type: BattleType,
    /// Ask the simulator for its full event log.
    pub verbose_log: bool,
    /// Send both digest summaries to the log callback before the first trial.
    pub log_digests: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trial_count: 100,
            seed: SeedPolicy::WallClock,
            battle_type: BattleType::Arena,
            verbose_log: true,
            log_digests: true,
        }
    }
}

impl TrialConfig {
    pub fn with_trials(trial_count: u32, seed: SeedPolicy) -> Self {
        Self {
            trial_count,
            seed,
            ..Default::default()
        }
    }
}
