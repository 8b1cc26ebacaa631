// nfc-bridge-rs/nfcbridge/src/controller/mod.rs

pub mod mock;
pub mod pn532;

pub use mock::MockController;
pub use pn532::Pn532Controller;

use std::time::Duration;

use crate::Result;

/// How the controller notices that an external reader has activated the
/// emulated tag. Both work on real hardware; which one is reliable depends
/// on the firmware revision, so the choice is configuration, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionStrategy {
    /// Passively poll the bus for the delayed TgInitAsTarget response frame.
    #[default]
    AwaitInitResponse,
    /// Actively issue TgGetData each poll and look for status 0x00.
    PollTgGetData,
}

/// A reader activated the emulated tag. Carries the raw response payload
/// that signalled the activation (mode byte and initiator command for the
/// init-response strategy, initiator data for TgGetData).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEvent {
    pub payload: Vec<u8>,
}

/// Command-level contract shared by the PN532 controller and the mock.
///
/// The session worker is the only caller; it owns the controller for the
/// whole process lifetime and serializes every operation through itself.
pub trait TagEmulator: Send {
    /// Open the controller: firmware handshake, then SAM configuration.
    /// Failure at any step leaves the controller closed.
    fn initialize(&mut self) -> Result<()>;

    fn is_initialized(&self) -> bool;

    /// Start emulating a Type-4 tag carrying `ndef`. Returns once the
    /// command is acknowledged; `Ok(false)` means the controller did not
    /// accept the command (no ACK within the retry budget).
    fn init_as_target(&mut self, ndef: &[u8]) -> Result<bool>;

    /// Block until a reader activates the emulated tag or `timeout` runs
    /// out (`Error::ResponseTimeout`). A 0x7F frame surfaces as
    /// `Error::SyntaxError`; the caller reinitializes before reuse.
    fn wait_for_tag(&mut self, timeout: Duration) -> Result<TagEvent>;

    /// Close the bus, let it quiesce, run initialization again. Invoked
    /// between sessions after a failure, never mid-command.
    fn reinitialize(&mut self) -> Result<()>;
}
