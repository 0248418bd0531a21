use bevy::prelude::*;
use rand::Rng;

use crate::inventory::ItemStack;

/// How long a dropped item lingers in the world before despawning.
pub const DROP_LIFETIME_SECS: f32 = 300.0;

const SCATTER_SPEED: f32 = 20.0;
const DRIFT_FRICTION: f32 = 0.9;

/// A dropped item entity in the world.
#[derive(Component, Debug)]
pub struct DroppedItem {
    pub stack: ItemStack,
    pub velocity: Vec2,
    pub lifetime: Timer,
}

/// Spawn `stack` as a world drop at `position`, with the small random
/// scatter velocity naturally dropped items get.
pub fn spawn_dropped(commands: &mut Commands, stack: ItemStack, position: Vec3) -> Entity {
    let mut rng = rand::thread_rng();
    let velocity = Vec2::new(
        rng.gen_range(-SCATTER_SPEED..SCATTER_SPEED),
        rng.gen_range(0.0..SCATTER_SPEED),
    );
    commands
        .spawn((
            DroppedItem {
                stack,
                velocity,
                lifetime: Timer::from_seconds(DROP_LIFETIME_SECS, TimerMode::Once),
            },
            Transform::from_translation(position),
        ))
        .id()
}

/// Drift drops by their scatter velocity and bleed it off.
pub fn dropped_item_drift_system(
    time: Res<Time>,
    mut drops: Query<(&mut Transform, &mut DroppedItem)>,
) {
    let delta = time.delta_secs();
    for (mut transform, mut drop) in &mut drops {
        transform.translation.x += drop.velocity.x * delta;
        transform.translation.y += drop.velocity.y * delta;
        drop.velocity *= DRIFT_FRICTION;
    }
}

/// Despawn drops whose lifetime has run out.
pub fn dropped_item_expiry_system(
    time: Res<Time>,
    mut commands: Commands,
    mut drops: Query<(Entity, &mut DroppedItem)>,
) {
    for (entity, mut drop) in &mut drops {
        if drop.lifetime.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn();
        }
    }
}
