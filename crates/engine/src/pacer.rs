//! Frame pacing.
//!
//! By default every frame sleeps the full delay, so the real frame rate drifts
//! with rendering cost. With compensation on, the time already spent since the
//! previous wait is subtracted from the delay.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    delay: Duration,
    compensate: bool,
    last_wake: Option<Instant>,
}

impl FramePacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            compensate: false,
            last_wake: None,
        }
    }

    /// Pacer that never sleeps (tests, benchmarks).
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn with_compensation(mut self, compensate: bool) -> Self {
        self.compensate = compensate;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// How long to sleep after `busy` was spent on the current frame.
    pub fn sleep_for(&self, busy: Duration) -> Duration {
        if self.compensate {
            self.delay.saturating_sub(busy)
        } else {
            self.delay
        }
    }

    /// Sleep until the next frame is due.
    pub fn wait(&mut self) {
        let busy = self
            .last_wake
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        let nap = self.sleep_for(busy);
        if !nap.is_zero() {
            std::thread::sleep(nap);
        }
        self.last_wake = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delay_ignores_frame_cost() {
        let pacer = FramePacer::new(Duration::from_millis(10));
        assert_eq!(pacer.sleep_for(Duration::from_millis(4)), Duration::from_millis(10));
        assert_eq!(pacer.sleep_for(Duration::from_millis(40)), Duration::from_millis(10));
    }

    #[test]
    fn compensation_subtracts_frame_cost() {
        let pacer = FramePacer::new(Duration::from_millis(10)).with_compensation(true);
        assert_eq!(pacer.sleep_for(Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(pacer.sleep_for(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn wait_sleeps_at_least_the_delay() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn unpaced_never_sleeps() {
        let pacer = FramePacer::unpaced();
        assert_eq!(pacer.sleep_for(Duration::ZERO), Duration::ZERO);
    }
}
