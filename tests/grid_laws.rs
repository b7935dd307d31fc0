use cellstash_engine::{CellCoord, CellState, CellStore, GridSpec, InventoryError, ItemDescriptor, Quat, Vec3};

fn item(handle: u32, kind: &str) -> cellstash_engine::StoredItem {
    ItemDescriptor::new(handle, kind).into()
}

#[test]
fn corner_resolves_back_to_its_cell() {
    let frames = [
        GridSpec::new(6, 4, 0.1).unwrap(),
        GridSpec::with_frame(6, 4, 0.1, Vec3::new(-3.0, 2.0, 0.5), Quat::IDENTITY).unwrap(),
        GridSpec::with_frame(7, 5, 0.25, Vec3::new(1.3, -0.7, 0.0), Quat::IDENTITY).unwrap(),
    ];
    for grid in &frames {
        for at in grid.cells() {
            let corner = grid.cell_to_world(at.x, at.y);
            assert_eq!(grid.world_to_cell(corner, Quat::IDENTITY), at, "origin {:?}", grid.origin());
        }
    }
}

#[test]
fn centers_resolve_on_a_tilted_panel() {
    let tilt = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7);
    let grid = GridSpec::with_frame(6, 4, 0.1, Vec3::new(0.3, 1.2, -0.4), tilt).unwrap();
    for at in grid.cells() {
        assert_eq!(grid.world_to_cell_own(grid.cell_center(at.x, at.y)), at);
    }
}

#[test]
fn cells_iterate_in_slot_order() {
    let grid = GridSpec::new(3, 2, 1.0).unwrap();
    let cells: Vec<CellCoord> = grid.cells().collect();
    assert_eq!(cells.len(), grid.size());
    for (i, at) in cells.iter().enumerate() {
        assert_eq!(grid.index_unchecked(at.x as u32, at.y as u32), i);
    }
    assert_eq!(cells[1], CellCoord::new(0, 1));
}

#[test]
fn apple_stacking_walkthrough() {
    let mut store = CellStore::new(GridSpec::new(6, 4, 1.0).unwrap());
    let cell = CellCoord::new(2, 1);

    assert_eq!(store.place(cell, item(1, "Apple")), Ok(1));
    assert_eq!(store.place(cell, item(2, "Apple")), Ok(2));
    assert_eq!(
        store.state(cell),
        Ok(CellState::Occupied { kind: "Apple".into(), count: 2 })
    );

    let refused = store.place(cell, item(3, "Sword"));
    assert!(matches!(refused, Err(InventoryError::CellOccupiedByDifferentKind { .. })));
    assert_eq!(store.count(cell), Ok(2));

    assert_eq!(store.take(cell).map(|i| i.handle), Ok(2));
    assert_eq!(store.take(cell).map(|i| i.handle), Ok(1));
    assert_eq!(store.state(cell), Ok(CellState::Empty));
    assert_eq!(store.take(cell), Err(InventoryError::CellEmpty { x: 2, y: 1 }));
    assert_eq!(store.occupied_cells(), 0);
}

#[test]
fn auto_slot_on_empty_grid_is_origin() {
    let store = CellStore::new(GridSpec::new(6, 4, 1.0).unwrap());
    assert_eq!(store.find_slot(&"Sword".into()), Some(CellCoord::new(0, 0)));
}

#[test]
fn operations_outside_the_grid_fail_cleanly() {
    let mut store = CellStore::new(GridSpec::new(2, 2, 1.0).unwrap());
    let outside = CellCoord::new(2, 0);
    assert_eq!(store.place(outside, item(1, "Apple")), Err(InventoryError::OutOfBounds { x: 2, y: 0 }));
    assert_eq!(store.is_empty(outside), Err(InventoryError::OutOfBounds { x: 2, y: 0 }));
    assert_eq!(store.occupied_cells(), 0);
}
