use super::{ghost, hover, InventoryCore, PerfTimer};

pub(super) fn tick(world: &mut InventoryCore, dt: f64) {
    let perf_on = world.stats_enabled;
    let events_before = world.events.emitted_total();
    if perf_on {
        world.tick_stats.reset();
    }
    let mut timer = perf_on.then(PerfTimer::start);

    world.frame += 1;
    if dt.is_finite() && dt > 0.0 {
        world.clock += dt;
    }
    world.hand.stamp(world.clock);
    world.hand.expire(world.clock, world.release_grace_secs);
    if let Some(t) = timer.as_mut() {
        t.lap_ms();
    }

    // === INTERSECTION PHASE ===
    // Hover, take and place all happen here, at most once per tick
    hover::intersection_phase(world);
    world.hand.end_frame();
    if let Some(t) = timer.as_mut() {
        world.tick_stats.intersection_ms = t.lap_ms();
    }

    // === LATE PHASE ===
    // Ghosts see the occupancy left by every mutation of this tick
    ghost::late_phase(world);

    if let Some(mut t) = timer {
        let stats = &mut world.tick_stats;
        stats.late_ms = t.lap_ms();
        stats.tick_ms = t.elapsed_ms();
        stats.events_emitted = (world.events.emitted_total() - events_before) as u32;
        stats.ghosts_live = world.ghosts.live_count() as u32;
        stats.ghosts_pending = world.ghosts.pending_teardown() as u32;
        stats.occupied_cells = world.store.occupied_cells() as u32;
        stats.hovering = world.hovered.is_some();
    }
}
