use crate::core::{Quat, Vec3};
use crate::domain::AxisDirection;

use super::tick_stats::TickStats;
use super::InventoryCore;

pub(super) fn enable_tick_stats(world: &mut InventoryCore, enabled: bool) {
    world.stats_enabled = enabled;
    if !enabled {
        world.tick_stats.reset();
    }
}

pub(super) fn get_tick_stats(world: &InventoryCore) -> TickStats {
    world.tick_stats.clone()
}

pub(super) fn set_origin(world: &mut InventoryCore, origin: Vec3) {
    world.store.grid_mut().set_origin(origin);
}

pub(super) fn set_rotation(world: &mut InventoryCore, rotation: Quat) {
    world.store.grid_mut().set_rotation(rotation);
}

pub(super) fn set_cell_bound_size(world: &mut InventoryCore, size: Vec3) {
    world.cell_bound_size = size;
}

pub(super) fn set_default_direction(world: &mut InventoryCore, direction: AxisDirection) {
    world.default_direction = direction;
}

pub(super) fn set_release_grace(world: &mut InventoryCore, secs: f64) {
    if secs.is_finite() && secs >= 0.0 {
        world.release_grace_secs = secs;
    } else {
        log::warn!("ignoring release grace of {}s", secs);
    }
}
