//! CellStore - occupancy for every cell of one panel
//!
//! Cells live in a flat vector in grid slot order. Store operations take
//! coordinates and refuse out-of-bounds ones; addressing itself never does.

use crate::core::{InventoryError, InventoryResult};
use crate::domain::{ItemKind, StoredItem};
use crate::spatial::{CellCoord, GridSpec};

mod cell;

pub use cell::{Cell, CellState};

pub struct CellStore {
    grid: GridSpec,
    cells: Vec<Cell>,
    occupied: usize,
}

impl CellStore {
    pub fn new(grid: GridSpec) -> Self {
        let cells = vec![Cell::default(); grid.size()];
        Self { grid, cells, occupied: 0 }
    }

    #[inline]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut GridSpec {
        &mut self.grid
    }

    /// Number of non-empty cells
    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.occupied
    }

    pub fn cell(&self, at: CellCoord) -> InventoryResult<&Cell> {
        let idx = self.slot(at)?;
        Ok(&self.cells[idx])
    }

    /// In-bounds cells with their coordinates, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Cell)> + '_ {
        self.grid.cells().zip(self.cells.iter())
    }

    // === Highlight ===

    /// Mark the cell as hovered. Occupancy is untouched; returns whether the
    /// highlight changed.
    pub fn intersect(&mut self, at: CellCoord) -> InventoryResult<bool> {
        let idx = self.slot(at)?;
        Ok(self.cells[idx].set_highlighted(true))
    }

    pub fn stop_intersect(&mut self, at: CellCoord) -> InventoryResult<bool> {
        let idx = self.slot(at)?;
        Ok(self.cells[idx].set_highlighted(false))
    }

    // === Occupancy ===

    /// Push `item` onto the cell; returns the new stack count
    pub fn place(&mut self, at: CellCoord, item: StoredItem) -> InventoryResult<usize> {
        let idx = self.slot(at)?;
        let cell = &mut self.cells[idx];
        if let Some(existing) = cell.kind() {
            if *existing != item.kind {
                return Err(InventoryError::CellOccupiedByDifferentKind {
                    x: at.x,
                    y: at.y,
                    existing: existing.to_string(),
                    candidate: item.kind.to_string(),
                });
            }
        }
        let count = cell.push(item);
        if count == 1 {
            self.occupied += 1;
        }
        Ok(count)
    }

    /// Pop the most recently placed entry
    pub fn take(&mut self, at: CellCoord) -> InventoryResult<StoredItem> {
        let idx = self.slot(at)?;
        let cell = &mut self.cells[idx];
        let item = cell.pop().ok_or(InventoryError::CellEmpty { x: at.x, y: at.y })?;
        if cell.is_empty() {
            self.occupied -= 1;
        }
        Ok(item)
    }

    // === Queries ===

    pub fn is_empty(&self, at: CellCoord) -> InventoryResult<bool> {
        Ok(self.cell(at)?.is_empty())
    }

    pub fn matches_kind(&self, at: CellCoord, kind: &ItemKind) -> InventoryResult<bool> {
        Ok(self.cell(at)?.matches_kind(kind))
    }

    pub fn count(&self, at: CellCoord) -> InventoryResult<usize> {
        Ok(self.cell(at)?.count())
    }

    pub fn state(&self, at: CellCoord) -> InventoryResult<CellState> {
        Ok(self.cell(at)?.state())
    }

    /// Most recently placed entry, the one `take` would return
    pub fn top(&self, at: CellCoord) -> InventoryResult<Option<&StoredItem>> {
        Ok(self.cell(at)?.top())
    }

    /// Whether `kind` may go into the cell: empty, or same kind underneath
    pub fn accepts(&self, at: CellCoord, kind: &ItemKind) -> InventoryResult<bool> {
        let cell = self.cell(at)?;
        Ok(cell.is_empty() || cell.matches_kind(kind))
    }

    /// First cell, x outer then y, that is empty or already holds `kind`
    pub fn find_slot(&self, kind: &ItemKind) -> Option<CellCoord> {
        self.iter()
            .find(|(_, cell)| cell.is_empty() || cell.matches_kind(kind))
            .map(|(at, _)| at)
    }

    fn slot(&self, at: CellCoord) -> InventoryResult<usize> {
        self.grid
            .slot(at)
            .ok_or(InventoryError::OutOfBounds { x: at.x, y: at.y })
    }
}
