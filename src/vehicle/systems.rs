use bevy::prelude::*;

use crate::chat::ChatMessageEvent;
use crate::config::MessageTemplates;
use crate::inventory::{Inventory, ItemStack};
use crate::item::{CoreItems, spawn_dropped};
use crate::player::{Player, PlayerDeathEvent};

use super::claim::{ClaimLedger, RELEASE_DELAY_TICKS};
use super::components::{RideableCart, Riding};
use super::events::{CartBreakEvent, CartEnterEvent, CartExitEvent};

/// Tag carts the moment a player climbs in.
pub fn cart_enter_system(
    mut events: MessageReader<CartEnterEvent>,
    mut ledger: ResMut<ClaimLedger>,
    players: Query<(), With<Player>>,
    carts: Query<(), With<RideableCart>>,
    mut commands: Commands,
) {
    for event in events.read() {
        if players.get(event.rider).is_err() || carts.get(event.cart).is_err() {
            continue;
        }
        ledger.claim(event.cart);
        commands.entity(event.rider).insert(Riding(event.cart));
    }
}

/// Dismount: remove the cart from the world and hand it back as an
/// inventory item, or announce its loss when no slot is free.
pub fn cart_exit_system(
    mut events: MessageReader<CartExitEvent>,
    mut ledger: ResMut<ClaimLedger>,
    templates: Res<MessageTemplates>,
    core_items: Res<CoreItems>,
    mut players: Query<&mut Inventory, With<Player>>,
    carts: Query<Option<&Name>, With<RideableCart>>,
    mut chat: MessageWriter<ChatMessageEvent>,
    mut commands: Commands,
) {
    for event in events.read() {
        let Ok(mut inventory) = players.get_mut(event.rider) else {
            continue;
        };
        let Ok(cart_name) = carts.get(event.cart) else {
            continue;
        };

        // The name must be captured before the despawn, and the ledger
        // entry must outlive the despawn by the full release window.
        let custom_name = cart_name.map(|name| name.as_str().to_string());
        commands.entity(event.cart).despawn();
        ledger.release_after(event.cart, RELEASE_DELAY_TICKS);
        commands.entity(event.rider).remove::<Riding>();

        let stack = ItemStack::named(core_items.minecart, 1, custom_name);
        if inventory.free_slot_count() >= 1 {
            inventory.add(stack);
            if let Some(text) = &templates.collected {
                chat.write(ChatMessageEvent {
                    to: event.rider,
                    text: text.clone(),
                });
            }
        } else if let Some(text) = &templates.disappear {
            chat.write(ChatMessageEvent {
                to: event.rider,
                text: text.clone(),
            });
        }
    }
}

/// Suppress the engine's default drop for claimed carts; unclaimed carts
/// break normally and drop themselves as an item.
pub fn cart_break_system(
    mut events: MessageReader<CartBreakEvent>,
    ledger: Res<ClaimLedger>,
    core_items: Res<CoreItems>,
    carts: Query<(&Transform, Option<&Name>), With<RideableCart>>,
    mut commands: Commands,
) {
    for event in events.read() {
        // The claim lookup has to come before the liveness check: the
        // exit path may have despawned this cart earlier in the same
        // tick, and the still-set ledger entry is what marks the break
        // as already handled.
        if ledger.is_claimed(event.cart) {
            debug!("suppressed default drop for claimed cart {:?}", event.cart);
            continue;
        }
        let Ok((transform, name)) = carts.get(event.cart) else {
            continue;
        };

        let custom_name = name.map(|name| name.as_str().to_string());
        let position = transform.translation;
        commands.entity(event.cart).despawn();
        spawn_dropped(
            &mut commands,
            ItemStack::named(core_items.minecart, 1, custom_name),
            position,
        );
    }
}

/// Death merge: a mounted cart turns into a world drop next to the rest
/// of the death pile instead of being delivered to the dead rider.
pub fn rider_death_system(
    mut events: MessageReader<PlayerDeathEvent>,
    mut ledger: ResMut<ClaimLedger>,
    riders: Query<&Riding, With<Player>>,
    carts: Query<(&Transform, Option<&Name>), With<RideableCart>>,
    core_items: Res<CoreItems>,
    mut commands: Commands,
) {
    for event in events.read() {
        let Ok(riding) = riders.get(event.player) else {
            continue;
        };
        let cart = riding.0;
        let Ok((transform, name)) = carts.get(cart) else {
            continue;
        };

        // Removal and drop happen synchronously here, so the claim can
        // be cleared up front; no release window is needed.
        ledger.release_now(cart);
        let custom_name = name.map(|name| name.as_str().to_string());
        let position = transform.translation;
        commands.entity(cart).despawn();
        commands.entity(event.player).remove::<Riding>();
        spawn_dropped(
            &mut commands,
            ItemStack::named(core_items.minecart, 1, custom_name),
            position,
        );
    }
}

/// Advance deferred claim releases once per engine tick.
pub fn claim_cleanup_system(mut ledger: ResMut<ClaimLedger>) {
    ledger.tick();
}
