use crate::core::InventoryResult;
use crate::domain::InventoryConfig;
use crate::storage::CellStore;

use super::events::EventQueue;
use super::ghost::GhostTracker;
use super::hand::HandState;
use super::tick_stats::TickStats;
use super::{commands, InventoryCore};

pub(super) fn create_inventory_core(config: InventoryConfig) -> InventoryResult<InventoryCore> {
    config.validate()?;
    let grid = config.grid_spec()?;

    let mut world = InventoryCore {
        store: CellStore::new(grid),
        hand: HandState::new(),
        ghosts: GhostTracker::new(),
        events: EventQueue::new(),
        pointer: None,
        hovered: None,
        cell_bound_size: config.cell_bound_size,
        ghost_fit_factor: config.ghost_fit_factor,
        release_grace_secs: config.release_grace_secs,
        default_direction: config.default_direction,
        clock: 0.0,
        frame: 0,
        stats_enabled: false,
        tick_stats: TickStats::default(),
    };

    // A full panel still lets later items stack onto matching cells
    for item in config.starting_items {
        commands::add_item_automatically(&mut world, item);
    }

    log::info!(
        "inventory ready: {}x{} cells of {}, {} occupied",
        world.store.grid().width(),
        world.store.grid().height(),
        world.store.grid().cell_size(),
        world.store.occupied_cells()
    );
    Ok(world)
}
