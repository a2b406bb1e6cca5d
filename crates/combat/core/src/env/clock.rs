use std::cell::Cell;
use std::time::Instant;

/// Monotonic time source injected into every analyzer.
///
/// All cooldowns and wait windows in the engine are polling comparisons
/// against this clock; nothing ever sleeps or schedules a timer.
pub trait ClockOracle {
    /// Milliseconds since an arbitrary fixed origin. Must never decrease.
    fn now_ms(&self) -> u64;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockOracle for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock for deterministic tests and replays.
///
/// Time only moves when the test advances it, so cooldown and wait-window
/// behavior can be asserted exactly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }

    /// Jumps the clock to an absolute instant.
    ///
    /// Saturates instead of going backwards: the trait contract is
    /// monotonic.
    pub fn set(&self, now_ms: u64) {
        self.now.set(self.now.get().max(now_ms));
    }
}

impl ClockOracle for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
