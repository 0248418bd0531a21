use bevy::prelude::*;

/// Top-level system ordering sets for one engine tick.
///
/// Configured as a chain: Mounts → Exits → Deaths → Breaks → Items →
/// Cleanup → Chat. Break handling must be able to observe claims made
/// earlier in the same tick, and deferred claim cleanup always runs
/// after every handler.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Mounts,
    Exits,
    Deaths,
    Breaks,
    Items,
    Cleanup,
    Chat,
}
