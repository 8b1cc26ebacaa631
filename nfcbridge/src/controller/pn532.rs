// nfc-bridge-rs/nfcbridge/src/controller/pn532.rs

use std::thread;
use std::time::{Duration, Instant};

use crate::config::Pn532Config;
use crate::constants::{ACK_POLL_MS, FLUSH_READS, READ_CHUNK, REINIT_DELAY_MS, SETTLE_DELAY_MS};
use crate::controller::{DetectionStrategy, TagEmulator, TagEvent};
use crate::protocol::frame::Frame;
use crate::protocol::parser::expect_response_code;
use crate::protocol::{decode_firmware_version, decode_tg_get_data, information_frame, Command, Framer};
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Command-level driver for a PN532 behind a [`Transport`].
///
/// All timing rules live here: the pre-command flush, the 50 ms settle
/// delay, the 100 ms ACK window with retries, and the tag-wait poll cadence.
/// The framer below it owns byte-level reassembly.
pub struct Pn532Controller {
    transport: Box<dyn Transport>,
    framer: Framer,
    config: Pn532Config,
    firmware: Option<FirmwareVersion>,
    initialized: bool,
}

impl Pn532Controller {
    pub fn new(transport: Box<dyn Transport>, config: Pn532Config) -> Self {
        Self {
            transport,
            framer: Framer::new(),
            config,
            firmware: None,
            initialized: false,
        }
    }

    /// Firmware reported by the last successful initialize().
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Pre-command hygiene: drop buffered parse state and drain anything the
    /// controller still has queued from a previous exchange.
    fn flush(&mut self) -> Result<()> {
        self.framer.clear();
        for _ in 0..FLUSH_READS {
            if !self.transport.is_ready()? {
                break;
            }
            let stale = self.transport.read(READ_CHUNK)?;
            tracing::debug!(bytes = stale.len(), "flushed stale data");
        }
        Ok(())
    }

    /// Frame and transmit a command, then wait for the ACK. Retries the
    /// whole write on a missing ACK up to the configured budget.
    fn submit(&mut self, cmd: &Command) -> Result<()> {
        self.flush()?;
        thread::sleep(Duration::from_millis(SETTLE_DELAY_MS));

        let frame = information_frame(&cmd.encode())?;
        tracing::debug!(
            "submit {:#04x}: {}",
            cmd.command_code(),
            bytes_to_hex_spaced(&frame)
        );

        let mut attempts = 0u32;
        loop {
            self.transport.write(&frame)?;
            match self.await_ack() {
                Ok(()) => return Ok(()),
                Err(Error::AckTimeout { .. }) if attempts < self.config.max_retries => {
                    attempts += 1;
                    tracing::debug!(attempts, "no ack, retrying command");
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn await_ack(&mut self) -> Result<()> {
        let timeout = self.config.ack_timeout;
        let deadline = Instant::now() + timeout;
        loop {
            if self.transport.is_ready()? {
                let chunk = self.transport.read(READ_CHUNK)?;
                self.framer.feed(&chunk);
                if self.framer.try_extract_ack() {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(Error::AckTimeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            thread::sleep(Duration::from_millis(ACK_POLL_MS));
        }
    }

    /// Pull chunks until the framer yields a frame or the deadline passes.
    fn await_response(&mut self, timeout: Duration) -> Result<Vec<u8>> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.transport.is_ready()? {
                let chunk = self.transport.read(READ_CHUNK)?;
                self.framer.feed(&chunk);
                match self.framer.try_extract_frame() {
                    Some(Frame::SyntaxError) => return Err(Error::SyntaxError),
                    Some(Frame::Response(payload)) => return Ok(payload),
                    None => {}
                }
            }
            if Instant::now() >= deadline {
                return Err(Error::ResponseTimeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            thread::sleep(Duration::from_millis(ACK_POLL_MS));
        }
    }

    fn transceive(&mut self, cmd: &Command, timeout: Duration) -> Result<Vec<u8>> {
        self.submit(cmd)?;
        let payload = self.await_response(timeout)?;
        expect_response_code(&payload, cmd.response_code())?;
        Ok(payload)
    }

    fn wait_init_response(&mut self, timeout: Duration) -> Result<TagEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.transport.is_ready()? {
                let chunk = self.transport.read(READ_CHUNK)?;
                self.framer.feed(&chunk);
                match self.framer.try_extract_frame() {
                    Some(Frame::SyntaxError) => return Err(Error::SyntaxError),
                    Some(Frame::Response(payload)) => {
                        tracing::debug!(payload = %bytes_to_hex_spaced(&payload), "tag activated");
                        return Ok(TagEvent { payload });
                    }
                    None => {}
                }
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::ResponseTimeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            thread::sleep(remaining.min(self.config.poll_interval));
        }
    }

    fn wait_tg_get_data(&mut self, timeout: Duration) -> Result<TagEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::ResponseTimeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            let window = remaining.min(self.config.poll_interval);
            match self.transceive(&Command::TgGetData, window) {
                Ok(payload) => {
                    let (status, data) = decode_tg_get_data(&payload)?;
                    if status == 0x00 {
                        return Ok(TagEvent { payload: data });
                    }
                    tracing::debug!("target not activated yet, status {:#04x}", status);
                }
                // Nothing arrived inside this poll window; try again.
                Err(Error::ResponseTimeout { .. }) => {}
                Err(e) => return Err(e),
            }
            let nap = deadline
                .saturating_duration_since(Instant::now())
                .min(self.config.poll_interval);
            thread::sleep(nap);
        }
    }
}

impl TagEmulator for Pn532Controller {
    fn initialize(&mut self) -> Result<()> {
        self.initialized = false;
        self.firmware = None;

        let payload = self.transceive(&Command::GetFirmwareVersion, self.config.ready_timeout)?;
        let fw = decode_firmware_version(&payload)?;
        tracing::info!(firmware = %fw, "controller detected");

        // SAMConfiguration only needs the ACK; a late response frame, if the
        // firmware sends one, is drained by the next pre-command flush.
        self.submit(&Command::SamConfiguration)?;

        self.firmware = Some(fw);
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
        // The general-bytes length field is a single byte.
        if ndef.len() > 255 {
            return Err(Error::InvalidLength {
                expected: 255,
                actual: ndef.len(),
            });
        }

        let cmd = Command::TgInitAsTarget {
            ndef: ndef.to_vec(),
        };
        // Ack-only strategy: the response frame arrives only when a reader
        // activates the target, which wait_for_tag watches for.
        match self.submit(&cmd) {
            Ok(()) => Ok(true),
            Err(Error::AckTimeout { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn wait_for_tag(&mut self, timeout: Duration) -> Result<TagEvent> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        match self.config.detection {
            DetectionStrategy::AwaitInitResponse => self.wait_init_response(timeout),
            DetectionStrategy::PollTgGetData => self.wait_tg_get_data(timeout),
        }
    }

    fn reinitialize(&mut self) -> Result<()> {
        tracing::info!("reinitializing controller");
        self.initialized = false;
        self.framer.clear();
        self.transport.reset()?;
        thread::sleep(Duration::from_millis(REINIT_DELAY_MS));
        self.initialize()
    }
}
