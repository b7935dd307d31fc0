pub mod config;
pub mod fit;
pub mod item;

pub use config::InventoryConfig;
pub use item::{AxisDirection, ItemDescriptor, ItemHandle, ItemKind, StoredItem};
