use serde::Serialize;

use crate::core::Vec3;
use crate::domain::{ItemHandle, ItemKind, StoredItem};
use crate::spatial::CellCoord;

/// Messages for the host's rendering and UI layers, queued during a tick and
/// drained once per tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    /// Hover reached a cell; draw its outline. `candidate` is the held item.
    CellIntersected {
        cell: CellCoord,
        candidate: Option<ItemHandle>,
    },
    /// Hover left the cell; hide the outline and the preview
    StopCellIntersected { cell: CellCoord },
    /// Instantiate a preview of `item` under the cell's spawn anchor
    GhostSpawned {
        cell: CellCoord,
        item: ItemHandle,
        kind: ItemKind,
        scale: Vec3,
        rotation: Vec3,
        anchor: Vec3,
    },
    GhostDespawned { cell: CellCoord },
    /// Item went into the cell. Only the bottom entry of a stack stays visible.
    ItemStored {
        cell: CellCoord,
        item: ItemHandle,
        count: usize,
        scale: Vec3,
        rotation: Vec3,
        anchor: Vec3,
        visible: bool,
    },
    /// Item left the cell; restore its original scale and shaders
    ItemTaken {
        cell: CellCoord,
        item: StoredItem,
        remaining: usize,
    },
    LabelChanged {
        cell: CellCoord,
        name: String,
        count: usize,
    },
    LabelHidden { cell: CellCoord },
    InventoryFull { kind: ItemKind },
}

/// Counter text for one occupied cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellLabel {
    pub cell: CellCoord,
    pub name: String,
    pub count: usize,
}

#[derive(Default)]
pub struct EventQueue {
    pending: Vec<InventoryEvent>,
    emitted_total: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InventoryEvent) {
        log::trace!("event {:?}", event);
        self.emitted_total += 1;
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn emitted_total(&self) -> u64 {
        self.emitted_total
    }

    pub fn drain(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn drain_json(&mut self) -> String {
        let events = self.drain();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
