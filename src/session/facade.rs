use wasm_bindgen::prelude::*;

use crate::core::{Quat, Vec3};
use crate::domain::{AxisDirection, ItemDescriptor};
use crate::spatial::CellCoord;

use super::tick_stats::TickStats;
use super::{AutoPlace, InventoryCore};

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Inventory {
    core: InventoryCore,
}

#[wasm_bindgen]
impl Inventory {
    /// Create a panel with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: f32) -> Result<Inventory, JsValue> {
        let core = InventoryCore::new(width, height, cell_size).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Inventory, JsValue> {
        let core = InventoryCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.grid().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.grid().height() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> f32 { self.core.grid().cell_size() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.core.store().occupied_cells() as u32 }

    #[wasm_bindgen(getter)]
    pub fn live_ghosts(&self) -> u32 { self.core.ghosts().live_count() as u32 }

    /// Enable or disable per-tick stats (adds timing overhead when enabled)
    pub fn enable_tick_stats(&mut self, enabled: bool) {
        self.core.enable_tick_stats(enabled);
    }

    pub fn get_tick_stats(&self) -> TickStats {
        self.core.get_tick_stats()
    }

    // === PANEL TRANSFORM ===

    pub fn set_origin(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_origin(Vec3::new(x, y, z));
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.core.set_rotation(Quat::new(x, y, z, w));
    }

    pub fn set_cell_bound_size(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_cell_bound_size(Vec3::new(x, y, z));
    }

    /// 0..=5: +X, +Y, +Z, -X, -Y, -Z
    pub fn set_default_direction(&mut self, axis: u8) -> bool {
        match AxisDirection::from_u8(axis) {
            Some(direction) => {
                self.core.set_default_direction(direction);
                true
            }
            None => false,
        }
    }

    pub fn set_release_grace(&mut self, secs: f64) {
        self.core.set_release_grace(secs);
    }

    // === INPUT ===

    pub fn set_pointer(&mut self, x: f32, y: f32, z: f32) {
        self.core.set_pointer(Some(Vec3::new(x, y, z)));
    }

    pub fn clear_pointer(&mut self) {
        self.core.set_pointer(None);
    }

    /// Hand picked up an item. `shaders` are host shader ids in renderer order.
    #[allow(clippy::too_many_arguments)]
    pub fn hand_grab(
        &mut self,
        handle: u32,
        kind: String,
        scale_x: f32,
        scale_y: f32,
        scale_z: f32,
        bounds_x: f32,
        bounds_y: f32,
        bounds_z: f32,
        shaders: Vec<u32>,
    ) {
        let item = ItemDescriptor::new(handle, kind)
            .with_scale(Vec3::new(scale_x, scale_y, scale_z))
            .with_bounds(Vec3::new(bounds_x, bounds_y, bounds_z))
            .with_shaders(shaders);
        self.core.hand_grab(item);
    }

    /// Same as `hand_grab`, with the item given as a JSON descriptor
    pub fn hand_grab_json(&mut self, json: String) -> Result<(), JsValue> {
        let item: ItemDescriptor = serde_json::from_str(&json).map_err(to_js)?;
        self.core.hand_grab(item);
        Ok(())
    }

    pub fn hand_release(&mut self) {
        self.core.hand_release();
    }

    pub fn hand_drop(&mut self) {
        self.core.hand_drop();
    }

    pub fn set_select(&mut self, pressed: bool, released_this_frame: bool) {
        self.core.set_select(pressed, released_this_frame);
    }

    // === COMMANDS ===

    /// Store a JSON item descriptor at (x, y); returns the new stack count
    pub fn place(&mut self, x: i32, y: i32, item_json: String) -> Result<u32, JsValue> {
        let item: ItemDescriptor = serde_json::from_str(&item_json).map_err(to_js)?;
        let count = self.core.place(CellCoord::new(x, y), item).map_err(to_js)?;
        Ok(count as u32)
    }

    /// Pop the top item of (x, y) as JSON
    pub fn take(&mut self, x: i32, y: i32) -> Result<String, JsValue> {
        let item = self.core.take(CellCoord::new(x, y)).map_err(to_js)?;
        serde_json::to_string(&item).map_err(to_js)
    }

    /// Returns `{"result":"placed","x":..,"y":..}` or `{"result":"inventory_full"}`
    pub fn add_item_automatically(&mut self, item_json: String) -> Result<String, JsValue> {
        let item: ItemDescriptor = serde_json::from_str(&item_json).map_err(to_js)?;
        let outcome: AutoPlace = self.core.add_item_automatically(item);
        serde_json::to_string(&outcome).map_err(to_js)
    }

    /// Empty every cell; returns the removed items as JSON
    pub fn clear(&mut self) -> String {
        let removed = self.core.clear();
        serde_json::to_string(&removed).unwrap_or_else(|_| "[]".to_string())
    }

    // === QUERIES ===

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.core.grid().in_bounds(x, y)
    }

    /// False for out-of-bounds cells
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.core.is_empty(CellCoord::new(x, y)).unwrap_or(false)
    }

    pub fn matches_kind(&self, x: i32, y: i32, kind: String) -> bool {
        self.core
            .matches_kind(CellCoord::new(x, y), &kind.into())
            .unwrap_or(false)
    }

    /// 0 for empty or out-of-bounds cells
    pub fn stack_count(&self, x: i32, y: i32) -> u32 {
        self.core.stack_count(CellCoord::new(x, y)).unwrap_or(0) as u32
    }

    /// [x, y] of the cell under a world point, using the panel rotation
    pub fn world_to_cell(&self, x: f32, y: f32, z: f32) -> Vec<i32> {
        let grid = self.core.grid();
        let cell = grid.world_to_cell(Vec3::new(x, y, z), grid.rotation());
        vec![cell.x, cell.y]
    }

    /// [x, y] of the cell under a world point sampled against `rotation`
    #[allow(clippy::too_many_arguments)]
    pub fn world_to_cell_with_rotation(&self, x: f32, y: f32, z: f32, qx: f32, qy: f32, qz: f32, qw: f32) -> Vec<i32> {
        let cell = self
            .core
            .grid()
            .world_to_cell(Vec3::new(x, y, z), Quat::new(qx, qy, qz, qw));
        vec![cell.x, cell.y]
    }

    /// [x, y, z] of the cell corner (rotation ignored)
    pub fn cell_to_world(&self, x: i32, y: i32) -> Vec<f32> {
        self.core.grid().cell_to_world(x, y).to_array().to_vec()
    }

    /// [x, y, z] of the cell's spawn anchor on the oriented panel
    pub fn spawn_anchor(&self, x: i32, y: i32) -> Vec<f32> {
        self.core.spawn_anchor(CellCoord::new(x, y)).to_array().to_vec()
    }

    pub fn labels_json(&self) -> String {
        self.core.labels_json()
    }

    // === FRAME ===

    /// Advance one frame; then drain events with `drain_events_json`
    pub fn tick(&mut self, dt: f64) {
        self.core.tick(dt);
    }

    pub fn drain_events_json(&mut self) -> String {
        self.core.drain_events_json()
    }
}

impl Inventory {
    pub fn core(&self) -> &InventoryCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut InventoryCore {
        &mut self.core
    }
}
