//! InventoryCore - one inventory panel driven by the host frame loop
//!
//! The core owns the cell store, the hand state reported by the controller,
//! the ghost previews and the outgoing event queue. Everything goes through
//! an explicit `InventoryCore` handle; there is no ambient grid lookup.
//!
//! Per tick: intersection phase (hover, take, place), then late phase
//! (ghost reconciliation).

use serde::Serialize;

use crate::core::{InventoryResult, Quat, Vec3};
use crate::domain::{AxisDirection, InventoryConfig, ItemDescriptor, ItemKind, StoredItem};
use crate::spatial::{CellCoord, GridSpec};
use crate::storage::{CellState, CellStore};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "hand/hand.rs"]
mod hand;
#[path = "events/events.rs"]
mod events;
#[path = "ghost/ghosts.rs"]
mod ghost;
#[path = "hover/hover.rs"]
mod hover;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use events::{CellLabel, EventQueue, InventoryEvent};
pub use facade::Inventory;
pub use ghost::{GhostEntry, GhostTracker};
pub use hand::HandState;
pub use tick_stats::TickStats;

use perf_timer::PerfTimer;

/// Outcome of auto-placement. A full panel is an expected result, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AutoPlace {
    Placed(CellCoord),
    InventoryFull,
}

pub struct InventoryCore {
    store: CellStore,
    hand: HandState,
    ghosts: GhostTracker,
    events: EventQueue,

    // Hover
    pointer: Option<Vec3>,
    hovered: Option<CellCoord>,

    // Settings
    cell_bound_size: Vec3,
    ghost_fit_factor: f32,
    release_grace_secs: f64,
    default_direction: AxisDirection,

    // State
    clock: f64,
    frame: u64,

    // Stats
    stats_enabled: bool,
    tick_stats: TickStats,
}

impl InventoryCore {
    /// Panel with default settings and the given dimensions
    pub fn new(width: u32, height: u32, cell_size: f32) -> InventoryResult<Self> {
        Self::from_config(InventoryConfig {
            width,
            height,
            cell_size,
            ..InventoryConfig::default()
        })
    }

    pub fn from_config(config: InventoryConfig) -> InventoryResult<Self> {
        init::create_inventory_core(config)
    }

    pub fn from_config_json(json: &str) -> InventoryResult<Self> {
        Self::from_config(InventoryConfig::from_json(json)?)
    }

    pub fn grid(&self) -> &GridSpec { self.store.grid() }

    pub fn store(&self) -> &CellStore { &self.store }

    pub fn hand(&self) -> &HandState { &self.hand }

    pub fn ghosts(&self) -> &GhostTracker { &self.ghosts }

    pub fn events(&self) -> &EventQueue { &self.events }

    pub fn frame(&self) -> u64 { self.frame }

    /// Session time in seconds (sum of tick deltas)
    pub fn clock(&self) -> f64 { self.clock }

    pub fn hovered(&self) -> Option<CellCoord> { self.hovered }

    // === SETTINGS ===

    pub fn enable_tick_stats(&mut self, enabled: bool) {
        settings::enable_tick_stats(self, enabled);
    }

    /// Last tick snapshot (zeros when stats disabled)
    pub fn get_tick_stats(&self) -> TickStats {
        settings::get_tick_stats(self)
    }

    /// Host calls this whenever the panel moves
    pub fn set_origin(&mut self, origin: Vec3) {
        settings::set_origin(self, origin);
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        settings::set_rotation(self, rotation);
    }

    pub fn set_cell_bound_size(&mut self, size: Vec3) {
        settings::set_cell_bound_size(self, size);
    }

    pub fn set_default_direction(&mut self, direction: AxisDirection) {
        settings::set_default_direction(self, direction);
    }

    pub fn set_release_grace(&mut self, secs: f64) {
        settings::set_release_grace(self, secs);
    }

    // === INPUT ===

    /// World point the hand ray hits on the panel, or None when it misses
    pub fn set_pointer(&mut self, point: Option<Vec3>) {
        self.pointer = point;
    }

    pub fn hand_grab(&mut self, item: ItemDescriptor) {
        self.hand.grab(item);
    }

    pub fn hand_release(&mut self) {
        self.hand.release();
    }

    pub fn hand_drop(&mut self) -> Option<ItemDescriptor> {
        self.hand.drop_held()
    }

    pub fn set_select(&mut self, pressed: bool, released_this_frame: bool) {
        self.hand.set_select(pressed, released_this_frame);
    }

    // === COMMANDS ===

    /// Push an item onto a cell; returns the new stack count
    pub fn place(&mut self, cell: CellCoord, item: ItemDescriptor) -> InventoryResult<usize> {
        commands::place(self, cell, item)
    }

    /// Pop the most recently stored item of a cell
    pub fn take(&mut self, cell: CellCoord) -> InventoryResult<StoredItem> {
        commands::take(self, cell)
    }

    /// Store into the first empty or matching cell, x outer then y
    pub fn add_item_automatically(&mut self, item: ItemDescriptor) -> AutoPlace {
        commands::add_item_automatically(self, item)
    }

    /// Empty every cell and return what was stored
    pub fn clear(&mut self) -> Vec<StoredItem> {
        hover::clear_hover(self);
        self.ghosts.close_all();
        commands::clear(self)
    }

    // === QUERIES ===

    pub fn is_empty(&self, cell: CellCoord) -> InventoryResult<bool> {
        self.store.is_empty(cell)
    }

    pub fn matches_kind(&self, cell: CellCoord, kind: &ItemKind) -> InventoryResult<bool> {
        self.store.matches_kind(cell, kind)
    }

    pub fn stack_count(&self, cell: CellCoord) -> InventoryResult<usize> {
        self.store.count(cell)
    }

    pub fn cell_state(&self, cell: CellCoord) -> InventoryResult<CellState> {
        self.store.state(cell)
    }

    /// World position of the cell's spawn anchor
    pub fn spawn_anchor(&self, cell: CellCoord) -> Vec3 {
        self.store.grid().cell_center(cell.x, cell.y)
    }

    /// Name and counter for every occupied cell, slot order
    pub fn labels(&self) -> Vec<CellLabel> {
        self.store
            .iter()
            .filter_map(|(cell, c)| {
                c.kind().map(|kind| CellLabel { cell, name: kind.to_string(), count: c.count() })
            })
            .collect()
    }

    pub fn labels_json(&self) -> String {
        serde_json::to_string(&self.labels()).unwrap_or_else(|_| "[]".to_string())
    }

    // === FRAME ===

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        step::tick(self, dt);
    }

    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        self.events.drain()
    }

    pub fn drain_events_json(&mut self) -> String {
        self.events.drain_json()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
