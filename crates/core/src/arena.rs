use crate::{
    ArenaEvent, ArenaSettings, ArenaSimulatorSheets, DebuffLimitSheet, PlayerDigest, RngState,
    StatModifier,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ArenaResult {
    Win,
    Lose,
    TimeOver,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArenaLog {
    pub result: ArenaResult,
    #[serde(default)]
    pub events: Vec<ArenaEvent>,
}

impl ArenaLog {
    pub fn is_win(&self) -> bool {
        self.result == ArenaResult::Win
    }
}

#[derive(Debug, Error)]
#[error("combat simulator fault: {0}")]
pub struct SimulationFault(pub String);

#[derive(Debug, Clone, Copy)]
pub struct ArenaMatch<'a> {
    pub local: &'a PlayerDigest,
    pub remote: &'a PlayerDigest,
    pub sheets: ArenaSimulatorSheets<'a>,
    pub local_effects: &'a [StatModifier],
    pub remote_effects: &'a [StatModifier],
    pub debuff_limits: &'a DebuffLimitSheet,
    pub settings: ArenaSettings,
}

/// All randomness must come from `rng`. Without `verbose`, `events` may be empty.
pub trait CombatSimulator {
    fn simulate(
        &self,
        rng: &mut RngState,
        arena: &ArenaMatch<'_>,
        verbose: bool,
    ) -> Result<ArenaLog, SimulationFault>;
}
