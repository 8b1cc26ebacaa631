// nfc-bridge-rs/nfcbridge/src/config.rs
//! Environment-driven configuration for the bridge daemon.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::ACK_TIMEOUT_MS;
use crate::controller::DetectionStrategy;
use crate::types::I2cAddress;
use crate::utils::timeout::{
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_SESSION_TIMEOUT_MS, DEFAULT_TAGGING_TIMEOUT_MS,
};

/// PN532 controller tuning.
#[derive(Debug, Clone)]
pub struct Pn532Config {
    /// I2C bus index (`/dev/i2c-<bus>`).
    pub bus: u32,
    pub address: I2cAddress,
    /// Bound on initialization replies (GetFirmwareVersion).
    pub ready_timeout: Duration,
    /// Bound on the per-command ACK wait.
    pub ack_timeout: Duration,
    /// Cadence of the tag-wait poll loop.
    pub poll_interval: Duration,
    /// Command retry budget after a missing ACK.
    pub max_retries: u32,
    pub detection: DetectionStrategy,
}

impl Default for Pn532Config {
    fn default() -> Self {
        Self {
            bus: 1,
            address: I2cAddress::DEFAULT,
            ready_timeout: Duration::from_secs(3),
            ack_timeout: Duration::from_millis(ACK_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_retries: 2,
            detection: DetectionStrategy::default(),
        }
    }
}

/// Session manager tuning.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Per-session lifetime from creation.
    pub session_timeout: Duration,
    /// Per-session tag-wait bound, armed when tagging begins.
    pub tagging_timeout: Duration,
    /// Reaper cadence.
    pub reap_interval: Duration,
    /// Substituted when a caller omits receiptUrl. Debug/test override, not
    /// normal operation; production callers always send the real link.
    pub default_receipt_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_timeout: Duration::from_millis(DEFAULT_SESSION_TIMEOUT_MS),
            tagging_timeout: Duration::from_millis(DEFAULT_TAGGING_TIMEOUT_MS),
            reap_interval: Duration::from_secs(5),
            default_receipt_url: "https://abc.com".to_owned(),
        }
    }
}

/// Everything the bridge daemon reads from the environment.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub host: String,
    pub port: u16,
    /// Swap the hardware controller for the mock.
    pub use_mock: bool,
    pub pn532: Pn532Config,
    pub session: SessionConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3001,
            use_mock: false,
            pn532: Pn532Config::default(),
            session: SessionConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Build a config from the process environment. Unset variables keep
    /// their defaults; unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(host) = env::var("HOST").ok().filter(|h| !h.is_empty()) {
            cfg.host = host;
        }
        if let Some(port) = parsed("PORT") {
            cfg.port = port;
        }
        cfg.use_mock = flag("USE_MOCK_PN532");

        if let Some(bus) = parsed("I2C_BUS") {
            cfg.pn532.bus = bus;
        }
        if let Some(raw) = parsed_with("I2C_ADDRESS", parse_u8_maybe_hex) {
            match I2cAddress::new(raw) {
                Ok(addr) => cfg.pn532.address = addr,
                Err(e) => tracing::warn!("ignoring I2C_ADDRESS: {}", e),
            }
        }
        if let Some(t) = parsed_ms("READY_TIMEOUT_MS") {
            cfg.pn532.ready_timeout = t;
        }
        if let Some(n) = parsed("MAX_RETRIES") {
            cfg.pn532.max_retries = n;
        }
        if let Some(raw) = env::var("TAG_DETECTION").ok().filter(|v| !v.is_empty()) {
            match raw.as_str() {
                "init-response" => cfg.pn532.detection = DetectionStrategy::AwaitInitResponse,
                "tg-get-data" => cfg.pn532.detection = DetectionStrategy::PollTgGetData,
                other => tracing::warn!("ignoring unknown TAG_DETECTION {:?}", other),
            }
        }

        if let Some(t) = parsed_ms("TAGGING_TIMEOUT_MS") {
            cfg.session.tagging_timeout = t;
        }
        if let Some(t) = parsed_ms("SESSION_TIMEOUT_MS") {
            cfg.session.session_timeout = t;
        }
        if let Some(url) = env::var("DEFAULT_RECEIPT_URL").ok().filter(|v| !v.is_empty()) {
            cfg.session.default_receipt_url = url;
        }

        cfg
    }
}

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    parsed_with(key, |raw| raw.parse().ok())
}

fn parsed_with<T>(key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(key).ok()?;
    if raw.is_empty() {
        return None;
    }
    match parse(&raw) {
        Some(v) => Some(v),
        None => {
            tracing::warn!("ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

fn parsed_ms(key: &str) -> Option<Duration> {
    parsed::<u64>(key).map(Duration::from_millis)
}

fn flag(key: &str) -> bool {
    matches!(
        env::var(key).ok().as_deref(),
        Some("1") | Some("true") | Some("yes")
    )
}

fn parse_u8_maybe_hex(raw: &str) -> Option<u8> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        raw.parse().ok()
    }
}
