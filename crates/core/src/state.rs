use crate::{Address, CollectionSheet, Item, ItemIdentity, ItemKind, NonFungibleId, StatModifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BattleType {
    Adventure,
    #[default]
    Arena,
    Raid,
}

impl BattleType {
    pub fn key(self) -> &'static str {
        match self {
            BattleType::Adventure => "adventure",
            BattleType::Arena => "arena",
            BattleType::Raid => "raid",
        }
    }
}

impl fmt::Display for BattleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub item: Item,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvatarState {
    pub address: Address,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub character_id: u32,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl AvatarState {
    pub fn new(address: Address, name: impl Into<String>, level: u32) -> Self {
        Self {
            address,
            name: name.into(),
            level,
            character_id: 0,
            inventory: Vec::new(),
        }
    }

    pub fn equipped(&self, kind: ItemKind) -> Vec<Item> {
        self.inventory
            .iter()
            .filter(|entry| entry.item.equipped && entry.item.kind() == kind)
            .map(|entry| entry.item.clone())
            .collect()
    }

    pub fn find_non_fungible(&self, id: &NonFungibleId) -> Option<&Item> {
        self.inventory
            .iter()
            .map(|entry| &entry.item)
            .find(|item| item.identity.non_fungible_id() == Some(id))
    }

    /// Overrides replace whatever is equipped in the same subtype.
    pub fn flyweight(&self, equipment: &[Item], costumes: &[Item], consumables: &[Item]) -> Self {
        let mut state = self.clone();
        for item in equipment.iter().chain(costumes) {
            state.equip_override(item);
        }
        for item in consumables {
            state.add_inventory_item(item, 1);
        }
        state
    }

    fn equip_override(&mut self, item: &Item) {
        for entry in &mut self.inventory {
            if entry.item.equipped && entry.item.sub_type == item.sub_type {
                entry.item.equipped = false;
            }
        }
        let mut item = item.clone();
        item.equipped = true;
        if let Some(entry) = self
            .inventory
            .iter_mut()
            .find(|entry| entry.item.identity == item.identity)
        {
            entry.item = item;
            return;
        }
        self.inventory.push(InventoryItem { item, count: 1 });
    }

    fn add_inventory_item(&mut self, item: &Item, count: u32) {
        if let ItemIdentity::Fungible(_) = item.identity {
            if let Some(entry) = self
                .inventory
                .iter_mut()
                .find(|entry| entry.item.identity == item.identity)
            {
                entry.count = entry.count.saturating_add(count);
                return;
            }
        }
        self.inventory.push(InventoryItem {
            item: item.clone(),
            count,
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemSlotState {
    pub battle_type: BattleType,
    #[serde(default)]
    pub equipments: Vec<NonFungibleId>,
    #[serde(default)]
    pub costumes: Vec<NonFungibleId>,
}

impl ItemSlotState {
    pub fn empty(battle_type: BattleType) -> Self {
        Self {
            battle_type,
            equipments: Vec::new(),
            costumes: Vec::new(),
        }
    }

    pub fn derive_address(avatar: Address, battle_type: BattleType) -> Address {
        avatar.derive(&format!("item_slot_{}", battle_type.key()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RuneType {
    #[default]
    Stat,
    Skill,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuneSlot {
    pub index: u32,
    #[serde(default)]
    pub rune_type: RuneType,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub rune_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuneSlotInfo {
    pub slot_index: u32,
    pub rune_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RuneSlotState {
    pub battle_type: BattleType,
    #[serde(default)]
    pub slots: Vec<RuneSlot>,
}

impl RuneSlotState {
    pub fn empty(battle_type: BattleType) -> Self {
        Self {
            battle_type,
            slots: Vec::new(),
        }
    }

    pub fn derive_address(avatar: Address, battle_type: BattleType) -> Address {
        avatar.derive(&format!("rune_slot_{}", battle_type.key()))
    }

    pub fn equipped_rune_slot_infos(&self) -> Vec<RuneSlotInfo> {
        self.slots
            .iter()
            .filter_map(|slot| {
                slot.rune_id.map(|rune_id| RuneSlotInfo {
                    slot_index: slot.index,
                    rune_id,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuneState {
    pub rune_id: u32,
    pub level: u32,
}

impl RuneState {
    pub fn derive_address(avatar: Address, rune_id: u32) -> Address {
        avatar.derive(&format!("rune_{rune_id}"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CollectionState {
    #[serde(default)]
    pub ids: BTreeSet<u32>,
}

impl CollectionState {
    pub fn effects(&self, sheet: &CollectionSheet) -> Vec<StatModifier> {
        self.ids
            .iter()
            .filter_map(|id| sheet.row(*id))
            .flat_map(|row| row.modifiers.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStates {
    pub avatar: AvatarState,
    #[serde(default)]
    pub collection: CollectionState,
    #[serde(default)]
    pub rune_slots: Vec<RuneSlotState>,
    #[serde(default)]
    pub runes: Vec<RuneState>,
    #[serde(default)]
    pub game_config: crate::GameConfigState,
}

impl LocalStates {
    pub fn equipped_rune_states(&self, battle_type: BattleType) -> Vec<RuneState> {
        let Some(slots) = self
            .rune_slots
            .iter()
            .find(|state| state.battle_type == battle_type)
        else {
            return Vec::new();
        };
        slots
            .equipped_rune_slot_infos()
            .iter()
            .filter_map(|info| self.runes.iter().find(|rune| rune.rune_id == info.rune_id))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemSubType;

    fn avatar_with_sword() -> AvatarState {
        let mut avatar = AvatarState::new(Address::new([1; 20]), "local", 120);
        let mut sword = Item::equipment(10100000, ItemSubType::Weapon, "old-sword", 3);
        sword.equipped = true;
        avatar.inventory.push(InventoryItem {
            item: sword,
            count: 1,
        });
        avatar
    }

    #[test]
    fn flyweight_replaces_equipped_subtype_and_keeps_base() {
        let base = avatar_with_sword();
        let new_sword = Item::equipment(10100001, ItemSubType::Weapon, "mod-sword", 10);
        let ring = Item::equipment(10400000, ItemSubType::Ring, "mod-ring", 0);
        let state = base.flyweight(&[new_sword, ring], &[], &[]);

        let equipped = state.equipped(ItemKind::Equipment);
        let ids: Vec<_> = equipped
            .iter()
            .filter_map(|item| item.identity.non_fungible_id())
            .map(|id| id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["mod-sword", "mod-ring"]);
        assert_eq!(base.equipped(ItemKind::Equipment).len(), 1);
    }

    #[test]
    fn flyweight_merges_fungible_consumables() {
        let food = Item::material(201000, ItemSubType::Food);
        let state = avatar_with_sword().flyweight(&[], &[], &[food.clone(), food.clone()]);
        let entry = state
            .inventory
            .iter()
            .find(|entry| entry.item.identity == food.identity)
            .expect("food");
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn equipped_rune_states_follow_battle_type() {
        let states = LocalStates {
            avatar: avatar_with_sword(),
            collection: CollectionState::default(),
            rune_slots: vec![RuneSlotState {
                battle_type: BattleType::Arena,
                slots: vec![
                    RuneSlot {
                        index: 0,
                        rune_type: RuneType::Stat,
                        locked: false,
                        rune_id: Some(10001),
                    },
                    RuneSlot {
                        index: 1,
                        rune_type: RuneType::Skill,
                        locked: true,
                        rune_id: None,
                    },
                ],
            }],
            runes: vec![
                RuneState {
                    rune_id: 10001,
                    level: 4,
                },
                RuneState {
                    rune_id: 10002,
                    level: 1,
                },
            ],
            game_config: Default::default(),
        };
        let arena = states.equipped_rune_states(BattleType::Arena);
        assert_eq!(
            arena,
            vec![RuneState {
                rune_id: 10001,
                level: 4
            }]
        );
        assert!(states.equipped_rune_states(BattleType::Raid).is_empty());
    }
}
