pub mod error;
pub mod math;

pub use error::{InventoryError, InventoryResult};
pub use math::{Quat, Vec3};
