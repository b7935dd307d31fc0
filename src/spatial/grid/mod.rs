//! GridSpec - addressing for the inventory panel
//!
//! A panel is W x H square cells of edge `cell_size`, laid out on the local
//! XY plane of a frame positioned at `origin` and oriented by `rotation`.
//! Slots are numbered x-major (`x * height + y`) so a plain slot walk visits
//! cells in the same order as the auto-placement scan.

use serde::{Deserialize, Serialize};

use crate::core::{InventoryError, InventoryResult, Quat, Vec3};

mod addressing;
mod indexing;

pub use indexing::CellCoords;

/// Integer cell address. Any pair is representable; only pairs inside
/// `[0, W) x [0, H)` address a real cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug)]
pub struct GridSpec {
    width: u32,
    height: u32,
    cell_size: f32,
    origin: Vec3,
    rotation: Quat,
}

impl GridSpec {
    pub fn new(width: u32, height: u32, cell_size: f32) -> InventoryResult<Self> {
        Self::with_frame(width, height, cell_size, Vec3::ZERO, Quat::IDENTITY)
    }

    pub fn with_frame(
        width: u32,
        height: u32,
        cell_size: f32,
        origin: Vec3,
        rotation: Quat,
    ) -> InventoryResult<Self> {
        if width == 0 || height == 0 {
            return Err(InventoryError::InvalidGrid(format!(
                "dimensions must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(InventoryError::InvalidGrid(format!(
                "cell size must be positive, got {}",
                cell_size
            )));
        }
        // Coordinates are i32 and the slot index is x * height + y
        if width > i32::MAX as u32 || height > i32::MAX as u32 || (width as u64) * (height as u64) > u32::MAX as u64 {
            return Err(InventoryError::InvalidGrid(format!(
                "grid {}x{} is too large",
                width, height
            )));
        }
        if !rotation.is_finite() {
            return Err(InventoryError::InvalidGrid("rotation is not finite".to_string()));
        }

        Ok(Self {
            width,
            height,
            cell_size,
            origin,
            rotation: rotation.normalize(),
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn origin(&self) -> Vec3 { self.origin }

    #[inline]
    pub fn rotation(&self) -> Quat { self.rotation }

    /// The host moves the panel around; origin follows cell (0,0).
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        if rotation.is_finite() {
            self.rotation = rotation.normalize();
        } else {
            log::warn!("ignoring non-finite panel rotation {:?}", rotation);
        }
    }
}
