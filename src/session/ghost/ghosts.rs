//! Ghost previews - presentation state keyed by cell
//!
//! Hover opens an entry with `show = true`. Teardown is never immediate:
//! stopping the hover (or the cell filling up) only flips `show`, and the
//! late phase of the tick despawns and drops the entry. A preview therefore
//! outlives its hover by at most one tick, and each hovered empty cell has at
//! most one showing entry.

use crate::core::Vec3;
use crate::domain::fit::fit_scale;
use crate::domain::ItemDescriptor;
use crate::spatial::CellCoord;

use super::events::InventoryEvent;
use super::InventoryCore;

#[derive(Clone, Debug)]
pub struct GhostEntry {
    pub cell: CellCoord,
    pub item: ItemDescriptor,
    pub show: bool,
    pub spawned: bool,
}

#[derive(Default)]
pub struct GhostTracker {
    entries: Vec<GhostEntry>,
}

impl GhostTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[GhostEntry] {
        &self.entries
    }

    /// Previews the host currently has instantiated
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.spawned).count()
    }

    pub fn pending_teardown(&self) -> usize {
        self.entries.iter().filter(|e| !e.show).count()
    }

    pub fn is_showing(&self, cell: CellCoord) -> bool {
        self.showing(cell).is_some()
    }

    /// The entry on `cell` that is not yet scheduled for teardown
    pub fn showing(&self, cell: CellCoord) -> Option<&GhostEntry> {
        self.entries.iter().find(|e| e.cell == cell && e.show)
    }

    /// Returns false when the cell already has a showing entry
    pub fn open(&mut self, cell: CellCoord, item: ItemDescriptor) -> bool {
        if self.is_showing(cell) {
            return false;
        }
        self.entries.push(GhostEntry { cell, item, show: true, spawned: false });
        true
    }

    /// Schedule teardown for every entry on `cell`
    pub fn close(&mut self, cell: CellCoord) {
        for entry in self.entries.iter_mut().filter(|e| e.cell == cell) {
            entry.show = false;
        }
    }

    pub fn close_all(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.show = false;
        }
    }
}

/// Late phase: runs after every occupancy change of the tick
pub(super) fn late_phase(world: &mut InventoryCore) {
    let InventoryCore {
        store,
        ghosts,
        events,
        cell_bound_size,
        ghost_fit_factor,
        default_direction,
        ..
    } = world;
    let rotation = default_direction.euler();

    ghosts.entries.retain_mut(|entry| {
        if !entry.show {
            if entry.spawned {
                events.push(InventoryEvent::GhostDespawned { cell: entry.cell });
            }
            return false;
        }

        match store.is_empty(entry.cell) {
            Ok(true) => {
                if !entry.spawned {
                    entry.spawned = true;
                    let scale = ghost_scale(&entry.item, *cell_bound_size, *ghost_fit_factor);
                    let anchor = store.grid().cell_center(entry.cell.x, entry.cell.y);
                    events.push(InventoryEvent::GhostSpawned {
                        cell: entry.cell,
                        item: entry.item.handle,
                        kind: entry.item.kind.clone(),
                        scale,
                        rotation,
                        anchor,
                    });
                }
            }
            // Filled by someone else; goes away next tick
            Ok(false) => entry.show = false,
            Err(e) => {
                log::warn!("dropping ghost on invalid cell: {}", e);
                if entry.spawned {
                    events.push(InventoryEvent::GhostDespawned { cell: entry.cell });
                }
                return false;
            }
        }
        true
    });
}

pub(super) fn ghost_scale(item: &ItemDescriptor, cell_bounds: Vec3, k: f32) -> Vec3 {
    fit_scale(item.scale, item.bounds, cell_bounds, k)
}
