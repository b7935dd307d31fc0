pub mod grid;

pub use grid::{CellCoord, GridSpec};
