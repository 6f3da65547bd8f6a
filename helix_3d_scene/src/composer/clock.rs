/// Monotonic delta-time source for the per-frame callback.

use std::time::Instant;

/// Measures elapsed seconds between consecutive `delta()` calls
#[derive(Debug, Default)]
pub struct Clock {
    last: Option<Instant>,
}

impl Clock {
    /// Create a clock; the first `delta()` call returns 0
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds elapsed since the previous call (0.0 on the first call)
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
