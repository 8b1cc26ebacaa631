// nfc-bridge-rs/nfcbridge/src/prelude.rs

pub use crate::config::{BridgeConfig, Pn532Config, SessionConfig};
pub use crate::controller::{
    DetectionStrategy, MockController, Pn532Controller, TagEmulator, TagEvent,
};
pub use crate::ndef::{decode_uri, encode_uri};
pub use crate::protocol::{information_frame, Command, Frame, Framer};
pub use crate::session::{Session, SessionManager, SessionStats, SessionStatus};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Error, FirmwareVersion, I2cAddress, Result, SessionId};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
