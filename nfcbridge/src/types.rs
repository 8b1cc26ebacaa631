// nfc-bridge-rs/nfcbridge/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::Error;

/// SessionId - Newtype Pattern (プロセス内で一意)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Allocate a fresh, process-unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// 7-bit I2C address newtype. Rejects values above 0x7F at construction so
/// transports never see a malformed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// The PN532 default address.
    pub const DEFAULT: Self = Self(crate::constants::DEFAULT_I2C_ADDRESS);

    pub fn new(addr: u8) -> Result<Self, Error> {
        if addr > 0x7F {
            return Err(Error::InvalidAddress(addr));
        }
        Ok(Self(addr))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn as_u16(&self) -> u16 {
        self.0 as u16
    }
}

impl Default for I2cAddress {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for I2cAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// GetFirmwareVersion reply: `{IC, Ver, Rev, Support}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub ver: u8,
    pub rev: u8,
    pub support: u8,
}

impl TryFrom<&[u8]> for FirmwareVersion {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            ic: bytes[0],
            ver: bytes[1],
            rev: bytes[2],
            support: bytes[3],
        })
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // IC byte 0x32 prints as "PN532"
        write!(f, "PN5{:02x} v{}.{}", self.ic, self.ver, self.rev)
    }
}
