// nfc-bridge-rs/nfcbridge/src/utils/timeout.rs
//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the commonly used default
//! timing values and provide a small conversion helper so tests and code can
//! express timeouts in milliseconds clearly.

use std::time::Duration;

/// Default cadence for the tag-wait poll loop. Must stay at or below the
/// 500 ms bound the PN532 tolerates between status reads in target mode.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Default per-session tagging window in milliseconds.
pub const DEFAULT_TAGGING_TIMEOUT_MS: u64 = 30_000;

/// Default session lifetime in milliseconds.
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 60_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default poll interval as Duration.
pub fn default_poll_interval() -> Duration {
    ms(DEFAULT_POLL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_to_duration() {
        assert_eq!(ms(500).as_millis(), 500);
    }

    #[test]
    fn poll_interval_within_target_mode_bound() {
        assert!(default_poll_interval() <= ms(500));
    }
}
