use crate::ArenaResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Local,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ArenaEvent {
    BattleStarted {
        local_level: u32,
        remote_level: u32,
    },
    TurnStarted {
        turn: u32,
    },
    SkillUsed {
        side: Side,
        skill_id: u32,
        damage: i64,
        critical: bool,
    },
    BuffApplied {
        side: Side,
        buff_id: u32,
    },
    CharacterDefeated {
        side: Side,
    },
    BattleEnded {
        result: ArenaResult,
        turns: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<ArenaEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: ArenaEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ArenaEvent> + '_ {
        self.queue.drain(..)
    }

    pub fn into_events(self) -> Vec<ArenaEvent> {
        self.queue
    }
}
