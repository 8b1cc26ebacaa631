// nfc-bridge-rs/nfcbridge/src/controller/mock.rs

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::controller::{TagEmulator, TagEvent};
use crate::{Error, Result};

/// Hardware-free controller for tests and kiosk development rigs.
///
/// Timing mimics a person fishing a phone out of a pocket: target init takes
/// about a second, the tap lands at a uniform-ish random point between 3 and
/// 7 seconds, clamped to stay inside the caller's timeout. `instant()`
/// zeroes the delays for unit tests.
#[derive(Debug)]
pub struct MockController {
    initialized: bool,
    init_delay: Duration,
    tap_after_min: Duration,
    tap_after_max: Duration,
    /// Testing hook: number of subsequent init_as_target calls that should
    /// report rejection (`Ok(false)`).
    pub init_rejections: usize,
    /// Testing hook: number of subsequent wait_for_tag calls that should
    /// fail with a syntax error.
    pub syntax_errors: usize,
    /// Testing hook: number of subsequent wait_for_tag calls where no tap
    /// arrives inside the window.
    pub tap_timeouts: usize,
    /// Number of reinitialize() calls observed.
    pub reinit_count: usize,
    /// Last NDEF message handed to init_as_target.
    pub last_ndef: Option<Vec<u8>>,
}

impl MockController {
    pub fn new() -> Self {
        Self {
            initialized: false,
            init_delay: Duration::from_secs(1),
            tap_after_min: Duration::from_secs(3),
            tap_after_max: Duration::from_secs(7),
            init_rejections: 0,
            syntax_errors: 0,
            tap_timeouts: 0,
            reinit_count: 0,
            last_ndef: None,
        }
    }

    /// A mock with all delays removed, for fast unit tests.
    pub fn instant() -> Self {
        Self::with_delays(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// A mock with explicit timing, for tests that need sessions to overlap.
    pub fn with_delays(init_delay: Duration, tap_min: Duration, tap_max: Duration) -> Self {
        Self {
            init_delay,
            tap_after_min: tap_min,
            tap_after_max: tap_max,
            ..Self::new()
        }
    }

    fn tap_delay(&self, timeout: Duration) -> Duration {
        let cap = timeout.saturating_sub(Duration::from_millis(500));
        jitter_between(self.tap_after_min, self.tap_after_max).min(cap)
    }
}

impl Default for MockController {
    fn default() -> Self {
        Self::new()
    }
}

impl TagEmulator for MockController {
    fn initialize(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn init_as_target(&mut self, ndef: &[u8]) -> Result<bool> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        self.last_ndef = Some(ndef.to_vec());
        thread::sleep(self.init_delay);
        if self.init_rejections > 0 {
            self.init_rejections -= 1;
            return Ok(false);
        }
        Ok(true)
    }

    fn wait_for_tag(&mut self, timeout: Duration) -> Result<TagEvent> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if self.syntax_errors > 0 {
            self.syntax_errors -= 1;
            return Err(Error::SyntaxError);
        }
        if self.tap_timeouts > 0 {
            self.tap_timeouts -= 1;
            thread::sleep(timeout);
            return Err(Error::ResponseTimeout {
                timeout_ms: timeout.as_millis() as u64,
            });
        }
        thread::sleep(self.tap_delay(timeout));
        Ok(TagEvent {
            payload: vec![0x8D, 0x04],
        })
    }

    fn reinitialize(&mut self) -> Result<()> {
        self.reinit_count += 1;
        self.initialized = true;
        Ok(())
    }
}

/// Uniform-ish delay in [lo, hi] derived from the clock's subsecond noise.
/// Good enough to spread mock taps around; not a statistics tool.
fn jitter_between(lo: Duration, hi: Duration) -> Duration {
    let span_ms = hi.saturating_sub(lo).as_millis() as u64;
    if span_ms == 0 {
        return lo;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64;
    lo + Duration::from_millis(nanos % (span_ms + 1))
}
