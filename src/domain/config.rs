use serde::{Deserialize, Serialize};

use crate::core::{InventoryError, InventoryResult, Quat, Vec3};
use crate::spatial::GridSpec;

use super::fit::DEFAULT_FIT_FACTOR;
use super::item::{AxisDirection, ItemDescriptor};

/// How long a released item stays eligible for placement (seconds)
pub const DEFAULT_RELEASE_GRACE_SECS: f64 = 0.15;

/// Inventory setup, supplied once at construction.
///
/// Every field has a default, so `{}` is a valid config (a 6x4 panel of
/// 0.1-unit cells at the world origin).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
    pub origin: Vec3,
    pub rotation: Quat,
    /// World-space extent of one cell's 3D volume
    pub cell_bound_size: Vec3,
    pub ghost_fit_factor: f32,
    pub release_grace_secs: f64,
    pub default_direction: AxisDirection,
    /// Placed in order with auto-placement when the session starts
    pub starting_items: Vec<ItemDescriptor>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 4,
            cell_size: 0.1,
            origin: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            cell_bound_size: Vec3::splat(0.1),
            ghost_fit_factor: DEFAULT_FIT_FACTOR,
            release_grace_secs: DEFAULT_RELEASE_GRACE_SECS,
            default_direction: AxisDirection::PositiveZ,
            starting_items: Vec::new(),
        }
    }
}

impl InventoryConfig {
    pub fn from_json(json: &str) -> InventoryResult<Self> {
        let config: InventoryConfig =
            serde_json::from_str(json).map_err(|e| InventoryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> InventoryResult<()> {
        if !self.ghost_fit_factor.is_finite() || self.ghost_fit_factor <= 0.0 {
            return Err(InventoryError::Config(format!(
                "ghost_fit_factor must be positive, got {}",
                self.ghost_fit_factor
            )));
        }
        if !self.release_grace_secs.is_finite() || self.release_grace_secs < 0.0 {
            return Err(InventoryError::Config(format!(
                "release_grace_secs must be non-negative, got {}",
                self.release_grace_secs
            )));
        }
        self.grid_spec()
            .map(|_| ())
            .map_err(|e| InventoryError::Config(e.to_string()))
    }

    pub fn grid_spec(&self) -> InventoryResult<GridSpec> {
        GridSpec::with_frame(self.width, self.height, self.cell_size, self.origin, self.rotation)
    }
}
