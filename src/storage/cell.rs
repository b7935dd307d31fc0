use serde::Serialize;

use crate::domain::{ItemKind, StoredItem};

/// Occupancy view of a cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellState {
    Empty,
    Occupied { kind: ItemKind, count: usize },
}

/// One inventory slot: a LIFO stack of items of a single kind plus the
/// hover highlight.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    stack: Vec<StoredItem>,
    highlighted: bool,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Kind of the bottom entry, which decides what may stack here
    pub fn kind(&self) -> Option<&ItemKind> {
        self.stack.first().map(|item| &item.kind)
    }

    /// False for an empty cell
    pub fn matches_kind(&self, kind: &ItemKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Entry a `pop` would return
    pub fn top(&self) -> Option<&StoredItem> {
        self.stack.last()
    }

    pub fn items(&self) -> &[StoredItem] {
        &self.stack
    }

    pub fn state(&self) -> CellState {
        match self.kind() {
            None => CellState::Empty,
            Some(kind) => CellState::Occupied { kind: kind.clone(), count: self.stack.len() },
        }
    }

    pub(super) fn set_highlighted(&mut self, on: bool) -> bool {
        let changed = self.highlighted != on;
        self.highlighted = on;
        changed
    }

    pub(super) fn push(&mut self, item: StoredItem) -> usize {
        self.stack.push(item);
        self.stack.len()
    }

    pub(super) fn pop(&mut self) -> Option<StoredItem> {
        self.stack.pop()
    }
}
