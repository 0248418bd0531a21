use std::collections::HashSet;

use bevy::prelude::*;

/// Ticks between a dismount-driven cart removal and its ledger entry
/// being cleared. A break event delivered inside this window must still
/// see the claim.
pub const RELEASE_DELAY_TICKS: u8 = 2;

#[derive(Debug)]
struct PendingRelease {
    cart: Entity,
    ticks_left: u8,
}

/// Claim state for every cart a player has mounted and not yet fully
/// released. Owned by this crate; the engine knows nothing about it, so
/// a stale entry for a despawned cart is harmless until its release
/// comes due.
#[derive(Resource, Debug, Default)]
pub struct ClaimLedger {
    claimed: HashSet<Entity>,
    pending: Vec<PendingRelease>,
}

impl ClaimLedger {
    /// Tag `cart` as player-claimed. Re-tagging is a no-op.
    pub fn claim(&mut self, cart: Entity) {
        self.claimed.insert(cart);
    }

    pub fn is_claimed(&self, cart: Entity) -> bool {
        self.claimed.contains(&cart)
    }

    /// Clear the claim immediately. Safe on carts that were never
    /// claimed.
    pub fn release_now(&mut self, cart: Entity) {
        self.claimed.remove(&cart);
        self.pending.retain(|p| p.cart != cart);
    }

    /// Clear the claim after `ticks` engine ticks. The release runs
    /// unconditionally and tolerates the cart entity being gone by the
    /// time it comes due.
    pub fn release_after(&mut self, cart: Entity, ticks: u8) {
        self.pending.push(PendingRelease { cart, ticks_left: ticks });
    }

    /// Advance deferred releases by one engine tick.
    pub fn tick(&mut self) {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            p.ticks_left = p.ticks_left.saturating_sub(1);
            if p.ticks_left == 0 {
                due.push(p.cart);
                false
            } else {
                true
            }
        });
        for cart in due {
            self.claimed.remove(&cart);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(world: &mut World) -> Entity {
        world.spawn_empty().id()
    }

    #[test]
    fn claim_is_idempotent() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let mut ledger = ClaimLedger::default();

        ledger.claim(cart);
        ledger.claim(cart);

        assert!(ledger.is_claimed(cart));
    }

    #[test]
    fn unclaimed_cart_reads_false() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let ledger = ClaimLedger::default();

        assert!(!ledger.is_claimed(cart));
    }

    #[test]
    fn release_now_clears_immediately() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let mut ledger = ClaimLedger::default();

        ledger.claim(cart);
        ledger.release_now(cart);

        assert!(!ledger.is_claimed(cart));
    }

    #[test]
    fn deferred_release_holds_for_the_full_window() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let mut ledger = ClaimLedger::default();

        ledger.claim(cart);
        ledger.release_after(cart, RELEASE_DELAY_TICKS);

        ledger.tick();
        assert!(ledger.is_claimed(cart));
        ledger.tick();
        assert!(!ledger.is_claimed(cart));
    }

    #[test]
    fn release_now_cancels_a_pending_release() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let other = entity(&mut world);
        let mut ledger = ClaimLedger::default();

        ledger.claim(cart);
        ledger.claim(other);
        ledger.release_after(cart, RELEASE_DELAY_TICKS);
        ledger.release_now(cart);
        ledger.claim(cart);

        ledger.tick();
        ledger.tick();
        // The cancelled release must not clear the re-asserted claim.
        assert!(ledger.is_claimed(cart));
        assert!(ledger.is_claimed(other));
    }

    #[test]
    fn release_of_a_despawned_cart_does_not_panic() {
        let mut world = World::new();
        let cart = entity(&mut world);
        let mut ledger = ClaimLedger::default();

        ledger.claim(cart);
        ledger.release_after(cart, RELEASE_DELAY_TICKS);
        world.despawn(cart);

        ledger.tick();
        ledger.tick();
        assert!(!ledger.is_claimed(cart));
    }
}
