use std::env;
use std::time::Duration;

use tuner_core::{TrialCount, MAX_TRIALS};

pub(crate) const DEFAULT_LATENCY_MIN_MS: u64 = 1_000;
pub(crate) const DEFAULT_LATENCY_MAX_MS: u64 = 2_500;
pub(crate) const DEFAULT_JSON_LIMIT_BYTES: usize = 16 * 1024;

/// Request limits for the tune endpoint.
///
/// Operators may lower the trial ceiling below the simulator's own maximum,
/// but never raise it above.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TunePolicy {
    pub(crate) max_trials: u32,
}

impl TunePolicy {
    pub(crate) fn from_env() -> Self {
        let max_trials = read_env_u32("MAX_TRIALS", MAX_TRIALS);
        if max_trials > MAX_TRIALS {
            tracing::warn!(
                "MAX_TRIALS ({}) exceeds the simulator ceiling ({}). Falling back to {}.",
                max_trials,
                MAX_TRIALS,
                MAX_TRIALS
            );
        }
        Self {
            max_trials: max_trials.min(MAX_TRIALS),
        }
    }

    /// Returns the rejection message on failure.
    pub(crate) fn check_trials(&self, num_trials: i64) -> Result<TrialCount, String> {
        if num_trials < 1 || num_trials > i64::from(self.max_trials) {
            return Err(format!(
                "Number of trials must be between 1 and {}.",
                self.max_trials
            ));
        }
        TrialCount::new(num_trials).map_err(|err| err.to_string())
    }
}

/// Artificial processing delay applied before answering a tune request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatencyRange {
    pub(crate) min_ms: u64,
    pub(crate) max_ms: u64,
}

impl LatencyRange {
    pub(crate) fn from_env() -> Self {
        let mut min_ms = read_env_u64_allow_zero("TUNE_LATENCY_MIN_MS", DEFAULT_LATENCY_MIN_MS);
        let mut max_ms = read_env_u64_allow_zero("TUNE_LATENCY_MAX_MS", DEFAULT_LATENCY_MAX_MS);

        if min_ms > max_ms {
            tracing::warn!(
                "TUNE_LATENCY_MIN_MS ({}) > TUNE_LATENCY_MAX_MS ({}). Falling back to defaults.",
                min_ms,
                max_ms
            );
            min_ms = DEFAULT_LATENCY_MIN_MS;
            max_ms = DEFAULT_LATENCY_MAX_MS;
        }

        Self { min_ms, max_ms }
    }

    /// Uniform draw from the configured window.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> Duration {
        Duration::from_millis(rng.u64(self.min_ms..=self.max_ms))
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) policy: TunePolicy,
    pub(crate) latency: LatencyRange,
}

pub(crate) fn read_env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

pub(crate) fn read_env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

pub(crate) fn read_env_u64_allow_zero(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
