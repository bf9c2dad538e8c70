use crate::{ItemSubType, StatModifier};
use serde::{Deserialize, Serialize};

pub const ARENA_HP_INCREASING_MODIFIER: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
    pub sub_type: ItemSubType,
    #[serde(default)]
    pub grade: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSheet {
    pub rows: Vec<ItemRow>,
}

impl ItemSheet {
    pub fn row(&self, id: u32) -> Option<&ItemRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuneRow {
    pub id: u32,
    pub ticker: String,
    #[serde(default)]
    pub modifiers_per_level: Vec<StatModifier>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuneSheet {
    pub rows: Vec<RuneRow>,
}

impl RuneSheet {
    pub fn row(&self, id: u32) -> Option<&RuneRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionRow {
    pub id: u32,
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionSheet {
    pub rows: Vec<CollectionRow>,
}

impl CollectionSheet {
    pub fn row(&self, id: u32) -> Option<&CollectionRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebuffLimitRow {
    pub group_id: u32,
    /// Upper bound, in percent, on the stat reduction this debuff group may apply.
    pub value: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebuffLimitSheet {
    pub rows: Vec<DebuffLimitRow>,
}

impl DebuffLimitSheet {
    pub fn limit_for(&self, group_id: u32) -> Option<i64> {
        self.rows
            .iter()
            .find(|row| row.group_id == group_id)
            .map(|row| row.value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSheets {
    pub items: ItemSheet,
    pub runes: RuneSheet,
    pub collection: CollectionSheet,
    pub debuff_limits: DebuffLimitSheet,
}

#[derive(Debug, Clone, Copy)]
pub struct ArenaSimulatorSheets<'a> {
    pub items: &'a ItemSheet,
    pub runes: &'a RuneSheet,
}

impl TableSheets {
    pub fn arena_simulator_sheets(&self) -> ArenaSimulatorSheets<'_> {
        ArenaSimulatorSheets {
            items: &self.items,
            runes: &self.runes,
        }
    }

    pub fn item_name(&self, id: u32) -> Option<&str> {
        self.items.row(id).map(|row| row.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfigState {
    pub shatter_strike_max_damage: i64,
}

impl Default for GameConfigState {
    fn default() -> Self {
        Self {
            shatter_strike_max_damage: 400_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSettings {
    pub hp_increasing_modifier: i32,
    pub shatter_strike_max_damage: i64,
}

impl ArenaSettings {
    pub fn from_game_config(config: &GameConfigState) -> Self {
        Self {
            hp_increasing_modifier: ARENA_HP_INCREASING_MODIFIER,
            shatter_strike_max_damage: config.shatter_strike_max_damage,
        }
    }
}
