use crate::{Address, AvatarState, Item, ItemKind, ItemSlotState, RuneState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerDigest {
    name: String,
    address: Address,
    level: u32,
    character_id: u32,
    equipments: Vec<Item>,
    costumes: Vec<Item>,
    runes: Vec<RuneState>,
}

impl PlayerDigest {
    pub fn from_avatar(avatar: &AvatarState, runes: Vec<RuneState>) -> Self {
        Self {
            name: avatar.name.clone(),
            address: avatar.address,
            level: avatar.level,
            character_id: avatar.character_id,
            equipments: avatar.equipped(ItemKind::Equipment),
            costumes: avatar.equipped(ItemKind::Costume),
            runes,
        }
    }

    /// Slot ids missing from the inventory are skipped.
    pub fn from_item_slots(
        avatar: &AvatarState,
        slots: &ItemSlotState,
        runes: Vec<RuneState>,
    ) -> Self {
        let resolve = |ids: &[crate::NonFungibleId]| -> Vec<Item> {
            ids.iter()
                .filter_map(|id| avatar.find_non_fungible(id))
                .cloned()
                .collect()
        };
        Self {
            name: avatar.name.clone(),
            address: avatar.address,
            level: avatar.level,
            character_id: avatar.character_id,
            equipments: resolve(&slots.equipments),
            costumes: resolve(&slots.costumes),
            runes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn character_id(&self) -> u32 {
        self.character_id
    }

    pub fn equipments(&self) -> &[Item] {
        &self.equipments
    }

    pub fn costumes(&self) -> &[Item] {
        &self.costumes
    }

    pub fn runes(&self) -> &[RuneState] {
        &self.runes
    }

    pub fn summary(&self, label: &str) -> String {
        let equipments = self
            .equipments
            .iter()
            .map(Item::display_name)
            .collect::<Vec<_>>()
            .join(", ");
        let costumes = self
            .costumes
            .iter()
            .map(Item::display_name)
            .collect::<Vec<_>>()
            .join(", ");
        let runes = self
            .runes
            .iter()
            .map(|rune| format!("{}(+{})", rune.rune_id, rune.level))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{label}Level: {}\n{label}Equipments: {equipments}\n{label}Costumes: {costumes}\n{label}Runes: {runes}",
            self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BattleType, InventoryItem, ItemSubType, NonFungibleId};

    fn remote_avatar() -> AvatarState {
        let mut avatar = AvatarState::new(Address::new([9; 20]), "remote", 250);
        for (id, sub_type) in [("w-1", ItemSubType::Weapon), ("a-1", ItemSubType::Armor)] {
            avatar.inventory.push(InventoryItem {
                item: Item::equipment(1, sub_type, id, 2),
                count: 1,
            });
        }
        avatar.inventory.push(InventoryItem {
            item: Item::costume(40100000, ItemSubType::FullCostume, "c-1"),
            count: 1,
        });
        avatar
    }

    #[test]
    fn item_slots_resolve_against_inventory() {
        let slots = ItemSlotState {
            battle_type: BattleType::Arena,
            equipments: vec![
                NonFungibleId("a-1".to_string()),
                NonFungibleId("missing".to_string()),
            ],
            costumes: vec![NonFungibleId("c-1".to_string())],
        };
        let digest = PlayerDigest::from_item_slots(&remote_avatar(), &slots, Vec::new());
        assert_eq!(digest.level(), 250);
        assert_eq!(digest.equipments().len(), 1);
        assert_eq!(digest.equipments()[0].sub_type, ItemSubType::Armor);
        assert_eq!(digest.costumes().len(), 1);
    }

    #[test]
    fn summary_lists_runes_with_levels() {
        let digest = PlayerDigest::from_avatar(
            &remote_avatar(),
            vec![RuneState {
                rune_id: 30001,
                level: 3,
            }],
        );
        let summary = digest.summary("enemy");
        assert!(summary.contains("enemyLevel: 250"));
        assert!(summary.contains("enemyRunes: 30001(+3)"));
        assert!(summary.contains("enemyEquipments: \n"));
    }
}
