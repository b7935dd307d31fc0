use super::*;
use crate::core::InventoryError;

const DT: f64 = 1.0 / 72.0;

fn core_6x4() -> InventoryCore {
    InventoryCore::new(6, 4, 1.0).unwrap()
}

/// World point in the middle of a cell on an unrotated unit grid
fn over(x: i32, y: i32) -> Option<Vec3> {
    Some(Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0))
}

fn count<F: Fn(&InventoryEvent) -> bool>(events: &[InventoryEvent], f: F) -> usize {
    events.iter().filter(|e| f(e)).count()
}

#[test]
fn hover_with_item_raises_one_intersect_and_one_stop() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(2, 1));

    let mut events = Vec::new();
    for _ in 0..5 {
        world.tick(DT);
        events.extend(world.drain_events());
    }
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::CellIntersected { .. })), 1);
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostSpawned { .. })), 1);
    assert_eq!(world.ghosts().live_count(), 1);
    assert!(world.store().cell(CellCoord::new(2, 1)).unwrap().is_highlighted());

    world.set_pointer(None);
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(
        count(&events, |e| matches!(e, InventoryEvent::StopCellIntersected { cell } if *cell == CellCoord::new(2, 1))),
        1
    );
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostDespawned { .. })), 1);
    assert_eq!(world.ghosts().live_count(), 0);
    assert!(world.ghosts().entries().is_empty());
    assert!(!world.store().cell(CellCoord::new(2, 1)).unwrap().is_highlighted());

    world.tick(DT);
    assert!(world.drain_events().is_empty());
}

#[test]
fn moving_between_cells_swaps_the_preview() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(0, 0));
    world.tick(DT);
    world.drain_events();

    world.set_pointer(over(1, 0));
    world.tick(DT);
    let events = world.drain_events();

    let stop = events
        .iter()
        .position(|e| matches!(e, InventoryEvent::StopCellIntersected { cell } if *cell == CellCoord::new(0, 0)))
        .unwrap();
    let enter = events
        .iter()
        .position(|e| matches!(e, InventoryEvent::CellIntersected { cell, .. } if *cell == CellCoord::new(1, 0)))
        .unwrap();
    assert!(stop < enter);
    assert_eq!(world.ghosts().live_count(), 1);
    assert_eq!(world.ghosts().entries()[0].cell, CellCoord::new(1, 0));
}

#[test]
fn no_preview_over_occupied_cell() {
    let mut world = core_6x4();
    world.place(CellCoord::new(3, 3), ItemDescriptor::new(9, "Rock")).unwrap();
    world.drain_events();

    world.hand_grab(ItemDescriptor::new(1, "Rock"));
    world.set_pointer(over(3, 3));
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::CellIntersected { .. })), 1);
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostSpawned { .. })), 0);
    assert_eq!(world.ghosts().live_count(), 0);
}

#[test]
fn release_over_cell_places_the_item() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(4, "Apple"));
    world.set_pointer(over(1, 2));
    world.tick(DT);
    assert_eq!(world.ghosts().live_count(), 1);
    world.drain_events();

    world.hand_release();
    world.set_select(false, true);
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(world.stack_count(CellCoord::new(1, 2)), Ok(1));
    assert!(events.iter().any(|e| matches!(e, InventoryEvent::ItemStored { item: 4, count: 1, visible: true, .. })));
    assert!(events.iter().any(
        |e| matches!(e, InventoryEvent::LabelChanged { name, count: 1, .. } if name == "Apple")
    ));
    // the hand is empty now, so the preview goes with the release
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostDespawned { .. })), 1);
    assert_eq!(world.ghosts().live_count(), 0);
    assert!(world.hand().last_released(world.clock(), 1.0).is_none());
}

#[test]
fn ghost_on_a_cell_filled_elsewhere_goes_one_tick_later() {
    let mut world = core_6x4();
    let cell = CellCoord::new(1, 2);
    world.hand_grab(ItemDescriptor::new(4, "Apple"));
    world.set_pointer(over(1, 2));
    world.tick(DT);
    world.drain_events();

    world.place(cell, ItemDescriptor::new(6, "Apple")).unwrap();
    world.tick(DT);
    assert_eq!(world.ghosts().live_count(), 1);
    assert!(!world.ghosts().is_showing(cell));

    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostDespawned { cell: c } if *c == cell)), 1);
    assert_eq!(world.ghosts().live_count(), 0);
    assert!(world.ghosts().entries().is_empty());
}

#[test]
fn release_edge_only_counts_for_one_tick() {
    let mut world = core_6x4();
    world.set_pointer(over(0, 0));
    world.set_select(false, true);
    world.tick(DT);
    assert!(!world.hand().select_released_this_frame());

    // Released item arrives after the edge has passed
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.hand_release();
    world.tick(DT);
    assert_eq!(world.is_empty(CellCoord::new(0, 0)), Ok(true));
}

#[test]
fn stale_release_is_not_placed() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.hand_release();
    world.tick(DT);
    world.tick(0.5);

    world.set_pointer(over(0, 0));
    world.set_select(false, true);
    world.tick(DT);
    assert_eq!(world.is_empty(CellCoord::new(0, 0)), Ok(true));
}

#[test]
fn release_in_a_slow_frame_still_places() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(1, 2));
    world.tick(DT);

    world.hand_release();
    world.set_select(false, true);
    world.tick(0.2);
    assert_eq!(world.stack_count(CellCoord::new(1, 2)), Ok(1));
}

#[test]
fn release_grace_counts_from_the_tick_that_saw_it() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.hand_release();
    world.tick(0.5);
    world.tick(0.1);

    world.set_pointer(over(0, 0));
    world.set_select(false, true);
    world.tick(0.01);
    assert_eq!(world.stack_count(CellCoord::new(0, 0)), Ok(1));
}

#[test]
fn release_onto_different_kind_is_ignored() {
    let mut world = core_6x4();
    world.place(CellCoord::new(0, 0), ItemDescriptor::new(1, "Apple")).unwrap();
    world.set_pointer(over(0, 0));
    world.hand_grab(ItemDescriptor::new(2, "Sword"));
    world.tick(DT);

    world.hand_release();
    world.set_select(false, true);
    world.tick(DT);
    assert_eq!(world.stack_count(CellCoord::new(0, 0)), Ok(1));
    assert!(world.hand().last_released(world.clock(), 0.15).is_some());
}

#[test]
fn select_on_occupied_cell_moves_item_into_hand_once() {
    let mut world = core_6x4();
    let cell = CellCoord::new(4, 1);
    world.place(cell, ItemDescriptor::new(1, "Apple").with_scale(Vec3::splat(2.0))).unwrap();
    world.place(cell, ItemDescriptor::new(2, "Apple").with_scale(Vec3::splat(3.0))).unwrap();
    world.drain_events();

    world.set_pointer(over(4, 1));
    world.set_select(true, false);
    world.tick(DT);
    let events = world.drain_events();

    assert_eq!(world.hand().held().map(|i| i.handle), Some(2));
    assert_eq!(world.hand().held().map(|i| i.scale), Some(Vec3::splat(3.0)));
    assert_eq!(world.stack_count(cell), Ok(1));
    assert!(events.iter().any(|e| matches!(e, InventoryEvent::ItemTaken { remaining: 1, .. })));
    assert!(events.iter().any(|e| matches!(e, InventoryEvent::LabelChanged { count: 1, .. })));

    // still pressed, now holding: nothing more is taken
    world.tick(DT);
    assert_eq!(world.stack_count(cell), Ok(1));
}

#[test]
fn taking_the_last_item_hides_the_label() {
    let mut world = core_6x4();
    let cell = CellCoord::new(0, 3);
    world.place(cell, ItemDescriptor::new(1, "Apple")).unwrap();
    world.drain_events();

    let item = world.take(cell).unwrap();
    assert_eq!(item.handle, 1);
    let events = world.drain_events();
    assert_eq!(events.last(), Some(&InventoryEvent::LabelHidden { cell }));
    assert_eq!(world.is_empty(cell), Ok(true));
}

#[test]
fn stacked_item_is_hidden_below_the_first() {
    let mut world = core_6x4();
    let cell = CellCoord::new(0, 0);
    world.place(cell, ItemDescriptor::new(1, "Apple")).unwrap();
    world.place(cell, ItemDescriptor::new(2, "Apple")).unwrap();
    let events = world.drain_events();
    let visible: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            InventoryEvent::ItemStored { visible, .. } => Some(*visible),
            _ => None,
        })
        .collect();
    assert_eq!(visible, vec![true, false]);
}

#[test]
fn auto_placement_and_full_inventory() {
    let mut world = InventoryCore::new(2, 1, 1.0).unwrap();
    assert_eq!(world.add_item_automatically(ItemDescriptor::new(1, "Sword")), AutoPlace::Placed(CellCoord::new(0, 0)));
    assert_eq!(world.add_item_automatically(ItemDescriptor::new(2, "Shield")), AutoPlace::Placed(CellCoord::new(1, 0)));
    assert_eq!(world.add_item_automatically(ItemDescriptor::new(3, "Sword")), AutoPlace::Placed(CellCoord::new(0, 0)));
    world.drain_events();

    assert_eq!(world.add_item_automatically(ItemDescriptor::new(4, "Bow")), AutoPlace::InventoryFull);
    let events = world.drain_events();
    assert_eq!(events, vec![InventoryEvent::InventoryFull { kind: "Bow".into() }]);
    assert_eq!(world.stack_count(CellCoord::new(0, 0)), Ok(2));
}

#[test]
fn starting_items_are_placed_at_construction() {
    let config = InventoryConfig {
        width: 2,
        height: 2,
        cell_size: 1.0,
        starting_items: vec![
            ItemDescriptor::new(1, "Apple"),
            ItemDescriptor::new(2, "Apple"),
            ItemDescriptor::new(3, "Sword"),
        ],
        ..InventoryConfig::default()
    };
    let world = InventoryCore::from_config(config).unwrap();
    assert_eq!(world.stack_count(CellCoord::new(0, 0)), Ok(2));
    assert_eq!(world.stack_count(CellCoord::new(0, 1)), Ok(1));
    assert_eq!(
        world.labels(),
        vec![
            CellLabel { cell: CellCoord::new(0, 0), name: "Apple".into(), count: 2 },
            CellLabel { cell: CellCoord::new(0, 1), name: "Sword".into(), count: 1 },
        ]
    );
}

#[test]
fn ghost_is_fitted_and_oriented() {
    let mut world = core_6x4();
    world.set_cell_bound_size(Vec3::splat(0.1));
    world.set_default_direction(AxisDirection::PositiveX);
    world.hand_grab(ItemDescriptor::new(1, "Apple").with_bounds(Vec3::new(0.2, 0.4, 0.1)));
    world.set_pointer(over(0, 0));
    world.tick(DT);

    let spawned = world
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            InventoryEvent::GhostSpawned { scale, rotation, anchor, .. } => Some((scale, rotation, anchor)),
            _ => None,
        })
        .unwrap();
    assert!((spawned.0.x - 0.25 * 0.92).abs() < 1e-6);
    assert_eq!(spawned.1, Vec3::new(0.0, 90.0, 0.0));
    assert_eq!(spawned.2, Vec3::new(0.5, 0.5, 0.0));
}

#[test]
fn dropping_the_item_while_hovering_closes_the_preview() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(5, 3));
    world.tick(DT);
    assert_eq!(world.ghosts().live_count(), 1);

    world.hand_drop();
    world.tick(DT);
    assert_eq!(world.ghosts().live_count(), 0);
}

#[test]
fn picking_up_while_hovering_opens_a_preview() {
    let mut world = core_6x4();
    world.set_pointer(over(2, 2));
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(events, vec![InventoryEvent::CellIntersected { cell: CellCoord::new(2, 2), candidate: None }]);

    world.hand_grab(ItemDescriptor::new(8, "Apple"));
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(
        count(&events, |e| matches!(e, InventoryEvent::CellIntersected { candidate: Some(8), .. })),
        1
    );
    assert_eq!(world.ghosts().live_count(), 1);
}

#[test]
fn swapping_the_held_item_replaces_the_preview() {
    let mut world = core_6x4();
    let cell = CellCoord::new(2, 2);
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(2, 2));
    world.tick(DT);
    world.drain_events();

    world.hand_grab(ItemDescriptor::new(2, "Sword").with_bounds(Vec3::splat(2.0)));
    world.tick(DT);
    let events = world.drain_events();
    assert_eq!(
        count(&events, |e| matches!(e, InventoryEvent::CellIntersected { candidate: Some(2), .. })),
        1
    );
    assert_eq!(count(&events, |e| matches!(e, InventoryEvent::GhostDespawned { .. })), 1);
    assert!(events.iter().any(|e| matches!(e, InventoryEvent::GhostSpawned { item: 2, .. })));

    assert_eq!(world.ghosts().live_count(), 1);
    assert_eq!(world.ghosts().showing(cell).map(|g| g.item.handle), Some(2));

    // same item next tick: nothing changes
    world.tick(DT);
    assert!(world.drain_events().is_empty());
}

#[test]
fn out_of_bounds_pointer_is_no_hover() {
    let mut world = core_6x4();
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(Some(Vec3::new(-0.5, 0.5, 0.0)));
    world.tick(DT);
    assert_eq!(world.hovered(), None);
    assert!(world.drain_events().is_empty());
}

#[test]
fn rotated_panel_hover_resolves_with_panel_rotation() {
    let mut world = core_6x4();
    let rotation = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
    world.set_origin(Vec3::new(10.0, 0.0, 0.0));
    world.set_rotation(rotation);

    let anchor = world.spawn_anchor(CellCoord::new(3, 1));
    world.set_pointer(Some(anchor));
    world.tick(DT);
    assert_eq!(world.hovered(), Some(CellCoord::new(3, 1)));
}

#[test]
fn clear_empties_everything() {
    let mut world = core_6x4();
    world.add_item_automatically(ItemDescriptor::new(1, "Apple"));
    world.add_item_automatically(ItemDescriptor::new(2, "Apple"));
    world.add_item_automatically(ItemDescriptor::new(3, "Sword"));
    let removed = world.clear();
    assert_eq!(removed.len(), 3);
    assert_eq!(world.store().occupied_cells(), 0);
    assert!(world.labels().is_empty());
}

#[test]
fn tick_stats_track_the_frame() {
    let mut world = core_6x4();
    world.enable_tick_stats(true);
    world.hand_grab(ItemDescriptor::new(1, "Apple"));
    world.set_pointer(over(0, 0));
    world.tick(DT);

    let stats = world.get_tick_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.events_emitted(), 2);
    assert_eq!(stats.ghosts_live(), 1);
    assert!(stats.hovering());
    assert_eq!(world.frame(), 1);
}

#[test]
fn invalid_dimensions_are_refused() {
    assert!(matches!(InventoryCore::new(0, 4, 1.0), Err(InventoryError::Config(_))));
    assert!(matches!(InventoryCore::new(6, 4, 0.0), Err(InventoryError::Config(_))));
}
