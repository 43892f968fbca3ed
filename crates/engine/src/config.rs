//! Runner settings read from the environment.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::FRAME_DELAY_MS;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Delay between frames
    pub frame_delay: Duration,
    /// Seed for obstacle gaps and leg animation
    pub seed: u32,
    /// Fixed first obstacle wait in frames (random when `None`)
    pub first_spawn: Option<u32>,
    /// Subtract the time spent on a frame from the next delay
    pub compensate: bool,
    /// Log file; logging stays off when `None`
    pub log_path: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            seed: clock_seed(),
            first_spawn: None,
            compensate: false,
            log_path: None,
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frame_ms = lookup("RUNNER_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(FRAME_DELAY_MS);

        let seed = lookup("RUNNER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let first_spawn = lookup("RUNNER_FIRST_SPAWN").and_then(|s| s.trim().parse().ok());

        let compensate = lookup("RUNNER_FRAME_COMPENSATE")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let log_path = lookup("RUNNER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            frame_delay: Duration::from_millis(frame_ms),
            seed,
            first_spawn,
            compensate,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
