use crate::schema::{
    CollectionRow, CollectionSheet, DebuffLimitRow, DebuffLimitSheet, GameConfigState, ItemRow,
    ItemSheet, LocalStates, RuneRow, RuneSheet, SheetManifest, TableSheets,
};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const MANIFEST_FILE: &str = "sheets.json";

pub fn load_sheet_manifest(dir: &Path) -> anyhow::Result<SheetManifest> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        load_json(path)
    } else {
        Ok(SheetManifest::default())
    }
}

pub fn load_table_sheets(dir: &Path) -> anyhow::Result<TableSheets> {
    let manifest = load_sheet_manifest(dir)?;
    let items: Vec<ItemRow> = load_json(dir.join(&manifest.items))?;
    let runes: Vec<RuneRow> = load_json(dir.join(&manifest.runes))?;
    let collection: Vec<CollectionRow> = load_json(dir.join(&manifest.collection))?;
    let debuff_limits: Vec<DebuffLimitRow> = load_json(dir.join(&manifest.debuff_limits))?;

    ensure_unique_ids("items", items.iter().map(|row| row.id))?;
    ensure_unique_ids("runes", runes.iter().map(|row| row.id))?;
    ensure_unique_ids("collection", collection.iter().map(|row| row.id))?;
    ensure_unique_ids("debuff_limits", debuff_limits.iter().map(|row| row.group_id))?;

    tracing::debug!(
        dir = %dir.display(),
        items = items.len(),
        runes = runes.len(),
        collection = collection.len(),
        debuff_limits = debuff_limits.len(),
        "loaded table sheets"
    );

    Ok(TableSheets {
        items: ItemSheet { rows: items },
        runes: RuneSheet { rows: runes },
        collection: CollectionSheet { rows: collection },
        debuff_limits: DebuffLimitSheet {
            rows: debuff_limits,
        },
    })
}

/// Missing game config file falls back to the default values.
pub fn load_game_config_state(dir: &Path) -> anyhow::Result<GameConfigState> {
    let manifest = load_sheet_manifest(dir)?;
    let path = dir.join(&manifest.game_config);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "game config missing, using defaults");
        return Ok(GameConfigState::default());
    }
    load_json(path)
}

pub fn load_local_states(path: &Path) -> anyhow::Result<LocalStates> {
    load_json(path)
}

fn ensure_unique_ids(sheet: &str, ids: impl Iterator<Item = u32>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate id {id} in {sheet} sheet");
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
