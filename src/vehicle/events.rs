use bevy::prelude::*;

/// An entity climbed into a cart.
#[derive(Message, Debug, Clone, Copy)]
pub struct CartEnterEvent {
    pub rider: Entity,
    pub cart: Entity,
}

/// An entity climbed out of a cart.
#[derive(Message, Debug, Clone, Copy)]
pub struct CartExitEvent {
    pub rider: Entity,
    pub cart: Entity,
}

/// Something other than the dismount path is about to destroy a cart
/// (environment damage, commands, cleanup sweeps).
#[derive(Message, Debug, Clone, Copy)]
pub struct CartBreakEvent {
    pub cart: Entity,
}
