pub mod definition;
pub mod dropped_item;
pub mod plugin;
pub mod registry;

pub use definition::*;
pub use dropped_item::*;
pub use plugin::ItemPlugin;
pub use registry::*;
