use bevy::prelude::*;

use crate::config::MessageTemplates;
use crate::sets::GameSet;

use super::claim::ClaimLedger;
use super::events::{CartBreakEvent, CartEnterEvent, CartExitEvent};
use super::systems::{
    cart_break_system, cart_enter_system, cart_exit_system, claim_cleanup_system,
    rider_death_system,
};

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClaimLedger>()
            .init_resource::<MessageTemplates>()
            .add_message::<CartEnterEvent>()
            .add_message::<CartExitEvent>()
            .add_message::<CartBreakEvent>()
            .configure_sets(
                Update,
                (
                    GameSet::Mounts,
                    GameSet::Exits,
                    GameSet::Deaths,
                    GameSet::Breaks,
                    GameSet::Items,
                    GameSet::Cleanup,
                    GameSet::Chat,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    cart_enter_system.in_set(GameSet::Mounts),
                    cart_exit_system.in_set(GameSet::Exits),
                    rider_death_system.in_set(GameSet::Deaths),
                    cart_break_system.in_set(GameSet::Breaks),
                    claim_cleanup_system.in_set(GameSet::Cleanup),
                ),
            );
    }
}
