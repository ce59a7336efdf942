use std::time::Duration;

/// Most ticks run for a single frame; a long stall is not replayed in full.
const MAX_CATCH_UP: u32 = 3;

/// Fixed-interval timer driven by frame deltas.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl Ticker {
    /// A stopped ticker firing every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Feeds `dt` of wall time and returns how many ticks came due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }

        if due > MAX_CATCH_UP {
            tracing::debug!(due, "dropping ticks after a long frame");
            due = MAX_CATCH_UP;
        }
        due
    }
}
