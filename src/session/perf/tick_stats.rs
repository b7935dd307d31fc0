use wasm_bindgen::prelude::*;

/// Snapshot of the last tick (all zeros while stats are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) intersection_ms: f64,
    pub(super) late_ms: f64,
    pub(super) events_emitted: u32,
    pub(super) ghosts_live: u32,
    pub(super) ghosts_pending: u32,
    pub(super) occupied_cells: u32,
    pub(super) hovering: bool,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn intersection_ms(&self) -> f64 { self.intersection_ms }
    #[wasm_bindgen(getter)]
    pub fn late_ms(&self) -> f64 { self.late_ms }
    #[wasm_bindgen(getter)]
    pub fn events_emitted(&self) -> u32 { self.events_emitted }
    #[wasm_bindgen(getter)]
    pub fn ghosts_live(&self) -> u32 { self.ghosts_live }
    /// Entries waiting for their teardown tick
    #[wasm_bindgen(getter)]
    pub fn ghosts_pending(&self) -> u32 { self.ghosts_pending }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn hovering(&self) -> bool { self.hovering }
}
