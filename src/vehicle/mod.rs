pub mod claim;
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use claim::*;
pub use components::*;
pub use events::*;
pub use plugin::VehiclePlugin;
pub use systems::*;
