use crate::{Item, ItemIdentity, ItemKind, ItemSubType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_SLOT_COUNT: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InventoryTab {
    Weapon,
    Armor,
    Belt,
    Necklace,
    Ring,
    Aura,
    Other,
}

impl InventoryTab {
    pub const ALL: [InventoryTab; 7] = [
        InventoryTab::Weapon,
        InventoryTab::Armor,
        InventoryTab::Belt,
        InventoryTab::Necklace,
        InventoryTab::Ring,
        InventoryTab::Aura,
        InventoryTab::Other,
    ];

    pub fn classify(sub_type: ItemSubType) -> Self {
        match sub_type {
            ItemSubType::Weapon => InventoryTab::Weapon,
            ItemSubType::Armor => InventoryTab::Armor,
            ItemSubType::Belt => InventoryTab::Belt,
            ItemSubType::Necklace => InventoryTab::Necklace,
            ItemSubType::Ring => InventoryTab::Ring,
            ItemSubType::Aura => InventoryTab::Aura,
            _ => InventoryTab::Other,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySlot {
    item: Option<Item>,
    count: u32,
}

impl InventorySlot {
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    fn holds(&self, identity: &ItemIdentity) -> bool {
        self.item
            .as_ref()
            .is_some_and(|item| &item.identity == identity)
    }

    fn set(&mut self, item: &Item, count: u32) {
        self.item = Some(item.clone());
        self.count = count;
    }

    fn clear(&mut self) {
        self.item = None;
        self.count = 0;
    }

    pub fn slot_text(&self) -> String {
        let Some(item) = self.item.as_ref() else {
            return String::new();
        };
        let mut text = match item.kind() {
            ItemKind::Equipment => format!(
                "Grade {}\n{}\n{}\n+{}",
                item.grade, item.elemental, item.name, item.level
            ),
            _ => item.name.clone(),
        };
        if self.count > 1 {
            text.push_str(&format!("\nx{}", self.count));
        }
        text
    }

    pub fn tooltip(&self) -> String {
        match self.item.as_ref() {
            Some(item) if item.kind() == ItemKind::Equipment => format!(
                "+{} {}\nGrade {} | {} | {:?}",
                item.level, item.name, item.grade, item.elemental, item.sub_type
            ),
            Some(item) => item.name.clone(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Page {
    slots: Vec<InventorySlot>,
}

impl Page {
    fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![InventorySlot::default(); slot_count],
        }
    }

    fn has_empty_slot(&self) -> bool {
        self.slots.iter().any(InventorySlot::is_empty)
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

#[derive(Debug, Clone)]
struct Tab {
    pages: Vec<Page>,
}

impl Tab {
    fn new(slot_count: usize) -> Self {
        Self {
            pages: vec![Page::new(slot_count)],
        }
    }

    fn clear(&mut self) {
        self.pages.truncate(1);
        if let Some(first) = self.pages.first_mut() {
            first.clear();
        }
    }

    fn slots(&self) -> impl Iterator<Item = (SlotPos, &InventorySlot)> {
        self.pages.iter().enumerate().flat_map(|(page, p)| {
            p.slots
                .iter()
                .enumerate()
                .map(move |(slot, s)| (SlotPos { page, slot }, s))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotPos {
    page: usize,
    slot: usize,
}

/// Adds top up a matching slot, then take the first empty one, then append a page.
#[derive(Debug, Clone)]
pub struct StackedInventory {
    slots_per_page: usize,
    stack_limit: u32,
    tabs: Vec<Tab>,
    current_tab: usize,
    current_page: usize,
    selected_slot: Option<usize>,
}

impl StackedInventory {
    pub fn new(tab_count: usize, slots_per_page: usize) -> Result<Self, InventoryError> {
        Self::with_stack_limit(tab_count, slots_per_page, MAX_SLOT_COUNT)
    }

    pub fn with_stack_limit(
        tab_count: usize,
        slots_per_page: usize,
        stack_limit: u32,
    ) -> Result<Self, InventoryError> {
        if tab_count == 0 {
            return Err(InventoryError::InvalidArgument(
                "tab count must be positive".to_string(),
            ));
        }
        if slots_per_page == 0 {
            return Err(InventoryError::InvalidArgument(
                "slots per page must be positive".to_string(),
            ));
        }
        if stack_limit == 0 {
            return Err(InventoryError::InvalidArgument(
                "stack limit must be positive".to_string(),
            ));
        }
        Ok(Self {
            slots_per_page,
            stack_limit,
            tabs: (0..tab_count).map(|_| Tab::new(slots_per_page)).collect(),
            current_tab: 0,
            current_page: 0,
            selected_slot: None,
        })
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn slots_per_page(&self) -> usize {
        self.slots_per_page
    }

    pub fn stack_limit(&self) -> u32 {
        self.stack_limit
    }

    pub fn current_tab_index(&self) -> usize {
        self.current_tab
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    pub fn selected_slot_index(&self) -> Option<usize> {
        self.selected_slot
    }

    pub fn page_count(&self) -> usize {
        self.tabs[self.current_tab].pages.len()
    }

    pub fn page_count_of(&self, tab: usize) -> Option<usize> {
        self.tabs.get(tab).map(|tab| tab.pages.len())
    }

    pub fn is_empty_page(&self, page: usize) -> bool {
        self.page_count() <= page
    }

    pub fn current_page_slots(&self) -> &[InventorySlot] {
        &self.tabs[self.current_tab].pages[self.current_page].slots
    }

    pub fn page_slots(&self, tab: usize, page: usize) -> Option<&[InventorySlot]> {
        let page = self.tabs.get(tab)?.pages.get(page)?;
        Some(&page.slots)
    }

    pub fn selected_slot(&self) -> Option<&InventorySlot> {
        let index = self.selected_slot?;
        self.current_page_slots().get(index)
    }

    pub fn slots_in_tab(&self, tab: usize) -> impl Iterator<Item = &InventorySlot> {
        self.tabs
            .get(tab)
            .into_iter()
            .flat_map(|tab| tab.slots().map(|(_, slot)| slot))
    }

    pub fn count_of(&self, identity: &ItemIdentity) -> u64 {
        self.tabs
            .iter()
            .flat_map(|tab| tab.slots())
            .filter(|(_, slot)| slot.holds(identity))
            .map(|(_, slot)| u64::from(slot.count))
            .sum()
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), InventoryError> {
        if index >= self.tabs.len() {
            return Err(InventoryError::InvalidArgument(format!(
                "tab {index} out of range (tabs={})",
                self.tabs.len()
            )));
        }
        self.current_tab = index;
        self.current_page = 0;
        self.selected_slot = None;
        Ok(())
    }

    pub fn select_page(&mut self, index: usize) -> Result<(), InventoryError> {
        if self.is_empty_page(index) {
            return Err(InventoryError::InvalidArgument(format!(
                "page {index} out of range (pages={})",
                self.page_count()
            )));
        }
        self.current_page = index;
        self.selected_slot = None;
        Ok(())
    }

    pub fn select_slot(&mut self, index: usize) -> Result<(), InventoryError> {
        if index >= self.slots_per_page {
            return Err(InventoryError::InvalidArgument(format!(
                "slot {index} out of range (slots={})",
                self.slots_per_page
            )));
        }
        self.selected_slot = Some(index);
        Ok(())
    }

    pub fn deselect_slot(&mut self) {
        self.selected_slot = None;
    }

    pub fn clear(&mut self) {
        for tab in &mut self.tabs {
            tab.clear();
        }
        self.current_page = 0;
        self.selected_slot = None;
    }

    pub fn add_item(&mut self, item: &Item, count: u32) -> Result<(), InventoryError> {
        if count == 0 {
            return Err(InventoryError::InvalidArgument(
                "count to add must be positive".to_string(),
            ));
        }
        let tab = self.tab_index_for(item);
        let limit = self.stack_limit;
        let mut remaining = count;
        while remaining > 0 {
            let pos = self.slot_to_add(tab, &item.identity);
            let slot = &mut self.tabs[tab].pages[pos.page].slots[pos.slot];
            let addable = limit - slot.count;
            if addable >= remaining {
                let total = slot.count + remaining;
                slot.set(item, total);
                return Ok(());
            }
            slot.set(item, limit);
            remaining -= addable;
        }
        Ok(())
    }

    pub fn add_items<'a, I>(&mut self, items: I) -> Result<(), InventoryError>
    where
        I: IntoIterator<Item = (&'a Item, u32)>,
    {
        for (item, count) in items {
            self.add_item(item, count)?;
        }
        Ok(())
    }

    // Not held is a no-op.
    pub fn remove_item(&mut self, item: &Item, count: u32) -> Result<(), InventoryError> {
        if count == 0 {
            return Err(InventoryError::InvalidArgument(
                "count to remove must be positive".to_string(),
            ));
        }
        let tab = self.tab_index_for(item);
        let mut remaining = count;
        while remaining > 0 {
            let Some(pos) = self.slot_to_remove(tab, &item.identity) else {
                return Ok(());
            };
            let slot = &mut self.tabs[tab].pages[pos.page].slots[pos.slot];
            if slot.count <= remaining {
                remaining -= slot.count;
                slot.clear();
            } else {
                slot.count -= remaining;
                remaining = 0;
            }
        }
        Ok(())
    }

    fn tab_index_for(&self, item: &Item) -> usize {
        InventoryTab::classify(item.sub_type)
            .index()
            .min(self.tabs.len() - 1)
    }

    fn slot_to_add(&mut self, tab: usize, identity: &ItemIdentity) -> SlotPos {
        let limit = self.stack_limit;
        let existing = self.tabs[tab]
            .slots()
            .find(|(_, slot)| slot.holds(identity) && slot.count < limit)
            .map(|(pos, _)| pos);
        if let Some(pos) = existing {
            return pos;
        }
        let page = self.page_with_empty_slot(tab);
        let slot = self.tabs[tab].pages[page]
            .slots
            .iter()
            .position(InventorySlot::is_empty)
            .unwrap_or_default();
        SlotPos { page, slot }
    }

    fn page_with_empty_slot(&mut self, tab: usize) -> usize {
        let tab = &mut self.tabs[tab];
        if let Some(page) = tab.pages.iter().position(Page::has_empty_slot) {
            return page;
        }
        tab.pages.push(Page::new(self.slots_per_page));
        tab.pages.len() - 1
    }

    fn slot_to_remove(&self, tab: usize, identity: &ItemIdentity) -> Option<SlotPos> {
        let mut matches = self.tabs[tab]
            .slots()
            .filter(|(_, slot)| slot.holds(identity));
        match identity {
            // Drain the smallest stack first; ties go to scan order.
            ItemIdentity::Fungible(_) => matches
                .min_by_key(|(_, slot)| slot.count)
                .map(|(pos, _)| pos),
            ItemIdentity::NonFungible(_) => matches.next().map(|(pos, _)| pos),
        }
    }
}
