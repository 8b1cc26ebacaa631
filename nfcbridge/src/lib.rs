// nfc-bridge-rs/nfcbridge/src/lib.rs

//! nfcbridge
//!
//! Card-emulation core for a point-of-sale NFC receipt bridge: drives a
//! PN532 over I2C into tag-emulation mode so a tapped phone reads a
//! short-lived receipt URL as an NDEF URI record. A queued session manager
//! serializes requests against the single controller, and a small HTTP
//! facade exposes session creation and polling.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod http;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
