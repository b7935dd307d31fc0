use crate::spatial::CellCoord;

use super::commands;
use super::events::InventoryEvent;
use super::InventoryCore;

/// Intersection phase: resolve the pointer to a cell once and apply the
/// hand's intent to it.
pub(super) fn intersection_phase(world: &mut InventoryCore) {
    let target = hovered_cell(world);
    let entered = target != world.hovered;

    if entered {
        if let Some(prev) = world.hovered.take() {
            stop_intersected(world, prev);
        }
    }

    let Some(cell) = target else {
        return;
    };
    world.hovered = Some(cell);
    cell_intersected(world, cell, entered);
}

/// In-bounds cell under the pointer; out-of-bounds counts as no hover
fn hovered_cell(world: &InventoryCore) -> Option<CellCoord> {
    let grid = world.store.grid();
    let point = world.pointer?;
    let cell = grid.world_to_cell(point, grid.rotation());
    grid.contains(cell).then_some(cell)
}

fn cell_intersected(world: &mut InventoryCore, cell: CellCoord, entered: bool) {
    let held = world.hand.held().cloned();

    if entered {
        if let Err(e) = world.store.intersect(cell) {
            log::warn!("intersect failed: {}", e);
            return;
        }
        world.events.push(InventoryEvent::CellIntersected {
            cell,
            candidate: held.as_ref().map(|item| item.handle),
        });
    }

    let empty = world.store.is_empty(cell).unwrap_or(false);

    match held {
        Some(item) if empty => {
            // hand swapped items mid-hover: preview the new one
            if world.ghosts.showing(cell).is_some_and(|g| g.item.handle != item.handle) {
                world.ghosts.close(cell);
            }
            if !world.ghosts.is_showing(cell) {
                if !entered {
                    // item arrived in the hand while already hovering
                    world.events.push(InventoryEvent::CellIntersected {
                        cell,
                        candidate: Some(item.handle),
                    });
                }
                world.ghosts.open(cell, item);
            }
        }
        Some(_) => {}
        None => {
            // Hand let go of its item; its preview goes with it
            world.ghosts.close(cell);
            if !empty && world.hand.select_pressed() {
                if let Err(e) = commands::take_into_hand(world, cell) {
                    log::warn!("take on hover failed: {}", e);
                }
            }
        }
    }

    if world.hand.select_released_this_frame() {
        place_released(world, cell);
    }
}

fn place_released(world: &mut InventoryCore, cell: CellCoord) {
    let Some(item) = world
        .hand
        .last_released(world.clock, world.release_grace_secs)
        .cloned()
    else {
        return;
    };

    match world.store.accepts(cell, &item.kind) {
        Ok(true) => {}
        Ok(false) => {
            log::debug!("'{}' does not stack onto ({}, {})", item.kind, cell.x, cell.y);
            return;
        }
        Err(e) => {
            log::warn!("placement check failed: {}", e);
            return;
        }
    }

    match commands::place(world, cell, item) {
        Ok(_) => {
            world.hand.take_last_released();
        }
        Err(e) => log::warn!("placing released item failed: {}", e),
    }
}

fn stop_intersected(world: &mut InventoryCore, cell: CellCoord) {
    if let Err(e) = world.store.stop_intersect(cell) {
        log::warn!("stop intersect failed: {}", e);
        return;
    }
    world.ghosts.close(cell);
    world.events.push(InventoryEvent::StopCellIntersected { cell });
}

/// Pointer left the panel between ticks (or the session is reset)
pub(super) fn clear_hover(world: &mut InventoryCore) {
    if let Some(prev) = world.hovered.take() {
        stop_intersected(world, prev);
    }
}
