/// Milliseconds on a monotonic-enough clock: `Date.now()` in the browser,
/// an `Instant` anchored at first use elsewhere.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    ANCHOR.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for one tick, split into laps per phase
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: f64,
    lap: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { started: now, lap: now }
    }

    /// Time since the previous lap (or the start)
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = now - self.lap;
        self.lap = now;
        lap
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        now_ms() - self.started
    }
}
