// nfc-bridge-rs/nfcbridge/src/transport/traits.rs

use crate::constants::READY_BIT;
use crate::Result;

/// Transport trait abstracts I/O away from framing/controller logic.
///
/// The PN532 on I2C exposes three primitives: an atomic write, a short read,
/// and a one-byte status poll whose low bit signals that a frame is waiting.
/// No buffering happens at this layer; the framer owns reassembly.
pub trait Transport: Send {
    /// Transmit the bytes atomically.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `n` bytes; fewer may come back if the controller NAKs early.
    fn read(&mut self, n: usize) -> Result<Vec<u8>>;

    /// One-byte status poll. Default implementation reads a single byte and
    /// tests the ready bit so implementations only have to provide `read`.
    fn is_ready(&mut self) -> Result<bool> {
        let byte = self.read(1)?;
        Ok(byte.first().is_some_and(|b| b & READY_BIT != 0))
    }

    /// Transport-level reopen, used by controller reinitialization.
    fn reset(&mut self) -> Result<()>;
}
