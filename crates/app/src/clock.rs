use std::time::{Duration, Instant};

use apsp::prelude::Clock;
use cpu_time::ProcessTime;

/// Wall-clock time via a monotonic [`Instant`].
pub struct WallClock {
    started: Instant,
    elapsed: Duration,
}

impl Clock for WallClock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    fn stop(&mut self) {
        self.elapsed = self.started.elapsed();
    }

    fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// CPU time consumed by the whole process, via [`ProcessTime`].
pub struct CpuClock {
    started: ProcessTime,
    elapsed: Duration,
}

impl Clock for CpuClock {
    fn start() -> Self {
        Self {
            started: ProcessTime::now(),
            elapsed: Duration::ZERO,
        }
    }

    fn stop(&mut self) {
        self.elapsed = self.started.elapsed();
    }

    fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}
