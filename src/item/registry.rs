use std::collections::HashMap;

use bevy::prelude::*;

use super::definition::ItemDef;

/// Compact item identifier. Index into ItemRegistry.defs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemId(pub u16);

impl ItemId {
    pub const AIR: ItemId = ItemId(0);
}

/// Registry of all item definitions.
#[derive(Resource, Debug)]
pub struct ItemRegistry {
    defs: Vec<ItemDef>,
    name_to_id: HashMap<String, ItemId>,
}

impl ItemRegistry {
    /// Build registry from a list of ItemDefs. Order = ItemId index.
    pub fn from_defs(defs: Vec<ItemDef>) -> Self {
        let name_to_id = defs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), ItemId(i as u16)))
            .collect();
        Self { defs, name_to_id }
    }

    pub fn get(&self, id: ItemId) -> &ItemDef {
        &self.defs[id.0 as usize]
    }

    pub fn max_stack(&self, id: ItemId) -> u16 {
        self.defs[id.0 as usize].max_stack
    }

    pub fn by_name(&self, name: &str) -> ItemId {
        *self
            .name_to_id
            .get(name)
            .unwrap_or_else(|| panic!("Unknown item: {name}"))
    }
}

/// Well-known item ids, resolved once when the registry is built.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CoreItems {
    pub air: ItemId,
    pub minecart: ItemId,
}
