use bevy::prelude::*;

use crate::sets::GameSet;

use super::definition::builtin_defs;
use super::dropped_item::{dropped_item_drift_system, dropped_item_expiry_system};
use super::registry::{CoreItems, ItemRegistry};

pub struct ItemPlugin;

impl Plugin for ItemPlugin {
    fn build(&self, app: &mut App) {
        let registry = ItemRegistry::from_defs(builtin_defs());
        let core = CoreItems {
            air: registry.by_name("air"),
            minecart: registry.by_name("minecart"),
        };
        app.insert_resource(registry)
            .insert_resource(core)
            .add_systems(
                Update,
                (dropped_item_drift_system, dropped_item_expiry_system).in_set(GameSet::Items),
            );
    }
}
