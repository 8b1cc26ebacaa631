// nfc-bridge-rs/nfcbridge/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("i2c bus not found")]
    BusNotFound,

    // I2C 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "i2c")]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    #[cfg(not(feature = "i2c"))]
    #[error("i2c error: {0}")]
    I2cString(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid 7-bit i2c address: {0:#04x}")]
    InvalidAddress(u8),

    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("no ack within {timeout_ms} ms")]
    AckTimeout { timeout_ms: u64 },

    #[error("no response within {timeout_ms} ms")]
    ResponseTimeout { timeout_ms: u64 },

    #[error("controller reported a syntax error (0x7F frame)")]
    SyntaxError,

    #[error("url too long for a short NDEF record: {len} bytes after abbreviation (max {max})")]
    UrlTooLong { len: usize, max: usize },

    #[error("controller command issued before initialize()")]
    NotInitialized,

    #[error("session manager is shut down")]
    ShutDown,
}

pub type Result<T> = std::result::Result<T, Error>;
