use crate::core::InventoryResult;
use crate::domain::{ItemDescriptor, StoredItem};
use crate::spatial::CellCoord;

use super::events::InventoryEvent;
use super::ghost::ghost_scale;
use super::{AutoPlace, InventoryCore};

pub(super) fn place(world: &mut InventoryCore, cell: CellCoord, item: ItemDescriptor) -> InventoryResult<usize> {
    let scale = ghost_scale(&item, world.cell_bound_size, world.ghost_fit_factor);
    let stored = StoredItem::from(item);
    let handle = stored.handle;
    let name = stored.kind.to_string();

    let count = world.store.place(cell, stored)?;
    log::debug!("stored '{}' ({}) at ({}, {}), count {}", name, handle, cell.x, cell.y, count);

    world.events.push(InventoryEvent::ItemStored {
        cell,
        item: handle,
        count,
        scale,
        rotation: world.default_direction.euler(),
        anchor: world.store.grid().cell_center(cell.x, cell.y),
        visible: count == 1,
    });
    world.events.push(InventoryEvent::LabelChanged { cell, name, count });
    Ok(count)
}

pub(super) fn take(world: &mut InventoryCore, cell: CellCoord) -> InventoryResult<StoredItem> {
    let item = world.store.take(cell)?;
    let remaining = world.store.count(cell)?;
    log::debug!("took '{}' ({}) from ({}, {}), {} left", item.kind, item.handle, cell.x, cell.y, remaining);

    world.events.push(InventoryEvent::ItemTaken { cell, item: item.clone(), remaining });
    if remaining == 0 {
        world.events.push(InventoryEvent::LabelHidden { cell });
    } else {
        world.events.push(InventoryEvent::LabelChanged {
            cell,
            name: item.kind.to_string(),
            count: remaining,
        });
    }
    Ok(item)
}

/// Take the top item and put it straight into the hand
pub(super) fn take_into_hand(world: &mut InventoryCore, cell: CellCoord) -> InventoryResult<()> {
    let item = take(world, cell)?;
    world.hand.grab(item.into());
    Ok(())
}

pub(super) fn add_item_automatically(world: &mut InventoryCore, item: ItemDescriptor) -> AutoPlace {
    let Some(cell) = world.store.find_slot(&item.kind) else {
        log::warn!("inventory is full, '{}' was not stored", item.kind);
        world.events.push(InventoryEvent::InventoryFull { kind: item.kind });
        return AutoPlace::InventoryFull;
    };

    match place(world, cell, item) {
        Ok(_) => AutoPlace::Placed(cell),
        Err(e) => {
            // find_slot only yields accepting cells
            log::error!("auto-placement into ({}, {}) failed: {}", cell.x, cell.y, e);
            AutoPlace::InventoryFull
        }
    }
}

pub(super) fn clear(world: &mut InventoryCore) -> Vec<StoredItem> {
    let occupied: Vec<CellCoord> = world
        .store
        .iter()
        .filter(|(_, c)| !c.is_empty())
        .map(|(at, _)| at)
        .collect();

    let mut removed = Vec::new();
    for cell in occupied {
        while let Ok(item) = take(world, cell) {
            removed.push(item);
        }
    }
    removed
}
