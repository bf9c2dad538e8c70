use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemSubType {
    Weapon,
    Armor,
    Belt,
    Necklace,
    Ring,
    Aura,
    FullCostume,
    HairCostume,
    EarCostume,
    EyeCostume,
    TailCostume,
    Title,
    Food,
    Hourglass,
    ApStone,
    EquipmentMaterial,
    MonsterPart,
    NormalMaterial,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Equipment,
    Costume,
    Consumable,
    Material,
}

impl ItemSubType {
    pub fn kind(self) -> ItemKind {
        match self {
            ItemSubType::Weapon
            | ItemSubType::Armor
            | ItemSubType::Belt
            | ItemSubType::Necklace
            | ItemSubType::Ring
            | ItemSubType::Aura => ItemKind::Equipment,
            ItemSubType::FullCostume
            | ItemSubType::HairCostume
            | ItemSubType::EarCostume
            | ItemSubType::EyeCostume
            | ItemSubType::TailCostume
            | ItemSubType::Title => ItemKind::Costume,
            ItemSubType::Food => ItemKind::Consumable,
            ItemSubType::Hourglass
            | ItemSubType::ApStone
            | ItemSubType::EquipmentMaterial
            | ItemSubType::MonsterPart
            | ItemSubType::NormalMaterial => ItemKind::Material,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ElementalType {
    #[default]
    Normal,
    Fire,
    Water,
    Land,
    Wind,
}

impl fmt::Display for ElementalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ElementalType::Normal => "Normal",
            ElementalType::Fire => "Fire",
            ElementalType::Water => "Water",
            ElementalType::Land => "Land",
            ElementalType::Wind => "Wind",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FungibleId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonFungibleId(pub String);

impl fmt::Display for FungibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for NonFungibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "id")]
pub enum ItemIdentity {
    Fungible(FungibleId),
    NonFungible(NonFungibleId),
}

impl ItemIdentity {
    pub fn fungible(id: impl Into<String>) -> Self {
        ItemIdentity::Fungible(FungibleId(id.into()))
    }

    pub fn non_fungible(id: impl Into<String>) -> Self {
        ItemIdentity::NonFungible(NonFungibleId(id.into()))
    }

    pub fn is_fungible(&self) -> bool {
        matches!(self, ItemIdentity::Fungible(_))
    }

    pub fn non_fungible_id(&self) -> Option<&NonFungibleId> {
        match self {
            ItemIdentity::NonFungible(id) => Some(id),
            ItemIdentity::Fungible(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub sheet_id: u32,
    pub sub_type: ItemSubType,
    pub identity: ItemIdentity,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub grade: u8,
    #[serde(default)]
    pub elemental: ElementalType,
    #[serde(default)]
    pub equipped: bool,
}

impl Item {
    pub fn equipment(
        sheet_id: u32,
        sub_type: ItemSubType,
        non_fungible_id: impl Into<String>,
        level: u32,
    ) -> Self {
        Self {
            sheet_id,
            sub_type,
            identity: ItemIdentity::non_fungible(non_fungible_id),
            name: format!("{sub_type:?} {sheet_id}"),
            level,
            grade: 1,
            elemental: ElementalType::Normal,
            equipped: false,
        }
    }

    pub fn costume(sheet_id: u32, sub_type: ItemSubType, non_fungible_id: impl Into<String>) -> Self {
        Self {
            sheet_id,
            sub_type,
            identity: ItemIdentity::non_fungible(non_fungible_id),
            name: format!("{sub_type:?} {sheet_id}"),
            level: 0,
            grade: 1,
            elemental: ElementalType::Normal,
            equipped: false,
        }
    }

    pub fn material(sheet_id: u32, sub_type: ItemSubType) -> Self {
        Self {
            sheet_id,
            sub_type,
            identity: ItemIdentity::fungible(format!("sheet-{sheet_id}")),
            name: format!("{sub_type:?} {sheet_id}"),
            level: 0,
            grade: 1,
            elemental: ElementalType::Normal,
            equipped: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_grade(mut self, grade: u8) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_elemental(mut self, elemental: ElementalType) -> Self {
        self.elemental = elemental;
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.sub_type.kind()
    }

    pub fn display_name(&self) -> String {
        match self.kind() {
            ItemKind::Equipment => format!("{}(+{})", self.name, self.level),
            _ => self.name.clone(),
        }
    }
}
