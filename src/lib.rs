//! Server-side rule that keeps rideable minecarts from being abandoned
//! in the world: dismounting destroys the cart and hands it back as an
//! inventory item (or announces its loss when the inventory is full),
//! the engine's own drop is suppressed for carts a player claimed, and
//! a rider dying in a cart leaves the cart item in the death pile.
//!
//! The host game feeds [`vehicle::CartEnterEvent`],
//! [`vehicle::CartExitEvent`], [`vehicle::CartBreakEvent`] and
//! [`player::PlayerDeathEvent`] into the message bus; everything else
//! happens inside [`vehicle::VehiclePlugin`].

pub mod chat;
pub mod compat;
pub mod config;
pub mod inventory;
pub mod item;
pub mod player;
pub mod sets;
pub mod vehicle;

#[cfg(test)]
pub mod test_helpers;
