use bevy::prelude::*;

use crate::item::ItemId;

/// Number of primary storage slots.
pub const MAIN_SLOTS: usize = 36;

/// A stack of one item kind, optionally carrying a custom display name.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u16,
    pub custom_name: Option<String>,
}

impl ItemStack {
    pub fn new(item: ItemId, count: u16) -> Self {
        Self {
            item,
            count,
            custom_name: None,
        }
    }

    pub fn named(item: ItemId, count: u16, custom_name: Option<String>) -> Self {
        Self {
            item,
            count,
            custom_name,
        }
    }
}

/// Player inventory component: fixed-size primary storage.
#[derive(Component, Debug)]
pub struct Inventory {
    pub slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: vec![None; MAIN_SLOTS],
        }
    }

    /// Count slots that are empty or hold the explicit "no item"
    /// placeholder.
    pub fn free_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| Self::is_free(slot)).count()
    }

    /// Put `stack` into the first free slot. Returns false, leaving the
    /// inventory untouched, when every slot is taken.
    pub fn add(&mut self, stack: ItemStack) -> bool {
        for slot in &mut self.slots {
            if Self::is_free(slot) {
                *slot = Some(stack);
                return true;
            }
        }
        false
    }

    fn is_free(slot: &Option<ItemStack>) -> bool {
        match slot {
            None => true,
            Some(stack) => stack.item == ItemId::AIR,
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
