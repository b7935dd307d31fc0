//! Cellstash Engine - grid inventory core for VR hosts
//!
//! The host engine renders the panel, tracks the controllers and owns the
//! item objects. This crate answers "which cell is under this point", keeps
//! the per-cell item stacks, and tells the host when to draw outlines, ghost
//! previews and counters.
//!
//! Layout:
//! - core/     - math and errors
//! - spatial/  - grid addressing
//! - domain/   - items, config, fitting
//! - storage/  - cell occupancy
//! - session/  - per-frame orchestration and the wasm facade

pub mod core;
pub mod spatial;
pub mod domain;
pub mod storage;
pub mod session;
pub mod logging;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging at info level
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logger(log::LevelFilter::Info);
    log::info!("cellstash engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// 0 = off ... 5 = trace
#[wasm_bindgen]
pub fn set_log_level(level: u8) {
    log::set_max_level(logging::level_from_u8(level));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{InventoryError, InventoryResult, Quat, Vec3};
pub use domain::{AxisDirection, InventoryConfig, ItemDescriptor, ItemHandle, ItemKind, StoredItem};
pub use session::{AutoPlace, Inventory, InventoryCore, InventoryEvent, TickStats};
pub use spatial::{CellCoord, GridSpec};
pub use storage::{CellState, CellStore};

// Axis ids accepted by `Inventory::set_default_direction`
#[wasm_bindgen]
pub fn axis_positive_x() -> u8 { AxisDirection::PositiveX as u8 }
#[wasm_bindgen]
pub fn axis_positive_y() -> u8 { AxisDirection::PositiveY as u8 }
#[wasm_bindgen]
pub fn axis_positive_z() -> u8 { AxisDirection::PositiveZ as u8 }
#[wasm_bindgen]
pub fn axis_negative_x() -> u8 { AxisDirection::NegativeX as u8 }
#[wasm_bindgen]
pub fn axis_negative_y() -> u8 { AxisDirection::NegativeY as u8 }
#[wasm_bindgen]
pub fn axis_negative_z() -> u8 { AxisDirection::NegativeZ as u8 }
