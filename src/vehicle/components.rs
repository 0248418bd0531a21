use bevy::prelude::*;

/// Marker for cart entities a player can ride.
#[derive(Component, Debug)]
pub struct RideableCart;

/// Link from a rider to the cart they are currently inside.
#[derive(Component, Debug)]
pub struct Riding(pub Entity);

/// Spawn a rideable cart at `position`, optionally carrying a display
/// name (renamed carts keep their name when collected back).
pub fn spawn_cart(commands: &mut Commands, position: Vec3, name: Option<&str>) -> Entity {
    let mut cart = commands.spawn((RideableCart, Transform::from_translation(position)));
    if let Some(name) = name {
        cart.insert(Name::new(name.to_string()));
    }
    cart.id()
}
