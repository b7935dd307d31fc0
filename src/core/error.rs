use thiserror::Error;

/// Recoverable conditions reported by the grid, the store and the session.
///
/// None of these poison the store; every refused operation leaves all cells
/// exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("cell ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell ({x}, {y}) holds '{existing}', cannot stack '{candidate}'")]
    CellOccupiedByDifferentKind {
        x: i32,
        y: i32,
        existing: String,
        candidate: String,
    },

    #[error("cell ({x}, {y}) is empty")]
    CellEmpty { x: i32, y: i32 },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;
