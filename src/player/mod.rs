use bevy::prelude::*;

use crate::inventory::Inventory;

/// Marker for human player entities.
#[derive(Component)]
pub struct Player;

/// A player died. Fired by whatever damage model the host game runs;
/// this crate only consumes it.
#[derive(Message, Debug, Clone, Copy)]
pub struct PlayerDeathEvent {
    pub player: Entity,
}

/// Spawn a player with an empty inventory at `position`.
pub fn spawn_player(commands: &mut Commands, name: &str, position: Vec3) -> Entity {
    commands
        .spawn((
            Player,
            Name::new(name.to_string()),
            Inventory::new(),
            Transform::from_translation(position),
        ))
        .id()
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerDeathEvent>();
    }
}
