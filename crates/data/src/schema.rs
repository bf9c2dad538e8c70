use serde::{Deserialize, Serialize};

pub use arenasim_core::{
    CollectionRow, CollectionSheet, DebuffLimitRow, DebuffLimitSheet, GameConfigState, ItemRow,
    ItemSheet, LocalStates, RuneRow, RuneSheet, TableSheets,
};

/// Directory manifest naming the sheet files; every entry is optional and
/// falls back to the default file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetManifest {
    #[serde(default = "default_items_file")]
    pub items: String,
    #[serde(default = "default_runes_file")]
    pub runes: String,
    #[serde(default = "default_collection_file")]
    pub collection: String,
    #[serde(default = "default_debuff_limits_file")]
    pub debuff_limits: String,
    #[serde(default = "default_game_config_file")]
    pub game_config: String,
}

impl Default for SheetManifest {
    fn default() -> Self {
        Self {
            items: default_items_file(),
            runes: default_runes_file(),
            collection: default_collection_file(),
            debuff_limits: default_debuff_limits_file(),
            game_config: default_game_config_file(),
        }
    }
}

fn default_items_file() -> String {
    "items.json".to_string()
}

fn default_runes_file() -> String {
    "runes.json".to_string()
}

fn default_collection_file() -> String {
    "collection.json".to_string()
}

fn default_debuff_limits_file() -> String {
    "debuff_limits.json".to_string()
}

fn default_game_config_file() -> String {
    "game_config.json".to_string()
}
