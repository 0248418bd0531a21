pub mod fixtures {
    use bevy::ecs::message::Messages;
    use bevy::prelude::*;

    use crate::chat::{ChatMessageEvent, ChatPlugin};
    use crate::config::MessageTemplates;
    use crate::inventory::Inventory;
    use crate::item::{DroppedItem, ItemPlugin};
    use crate::player::{Player, PlayerPlugin};
    use crate::vehicle::{RideableCart, VehiclePlugin};

    /// Templates as a typical config would load them (already in the
    /// native `§` form).
    pub fn test_templates() -> MessageTemplates {
        MessageTemplates {
            collected: Some("§aMinecart collected.".into()),
            disappear: Some("§cYour inventory is full, so the minecart was lost.".into()),
        }
    }

    /// Minimal headless app with every gameplay plugin installed.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins((ChatPlugin, ItemPlugin, PlayerPlugin, VehiclePlugin));
        app.insert_resource(test_templates());
        app
    }

    /// Spawn a player with an empty inventory directly into the world.
    pub fn spawn_test_player(app: &mut App, name: &str) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                Name::new(name.to_string()),
                Inventory::new(),
                Transform::default(),
            ))
            .id()
    }

    /// Spawn a rideable cart, optionally named.
    pub fn spawn_test_cart(app: &mut App, name: Option<&str>) -> Entity {
        let mut cart = app
            .world_mut()
            .spawn((RideableCart, Transform::from_xyz(64.0, 0.0, 0.0)));
        if let Some(name) = name {
            cart.insert(Name::new(name.to_string()));
        }
        cart.id()
    }

    /// Drain every chat line queued so far.
    pub fn drain_chat(app: &mut App) -> Vec<ChatMessageEvent> {
        app.world_mut()
            .resource_mut::<Messages<ChatMessageEvent>>()
            .drain()
            .collect()
    }

    /// Snapshot of every dropped-item stack currently in the world.
    pub fn dropped_stacks(app: &mut App) -> Vec<crate::inventory::ItemStack> {
        let world = app.world_mut();
        let mut drops = world.query::<&DroppedItem>();
        drops.iter(world).map(|drop| drop.stack.clone()).collect()
    }
}
