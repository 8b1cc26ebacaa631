// nfc-bridge-rs/nfcbridge/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize PN532 wire fixtures and MockTransport setup so
//! tests across the crate and the tests/ directory share one source of
//! truth for frame images.
#![allow(dead_code)]

use crate::config::Pn532Config;
use crate::constants::ACK_FRAME;
use crate::controller::Pn532Controller;
use crate::protocol::{dcs, lcs};
use crate::transport::{MockTransport, Transport};

/// The six-byte ACK, as one read chunk.
#[doc(hidden)]
pub fn ack_chunk() -> Vec<u8> {
    ACK_FRAME.to_vec()
}

/// Wrap a device-direction payload (after the TFI) into a full information
/// frame: `00 00 FF len ~len D5 payload dcs 00`.
#[doc(hidden)]
pub fn device_frame(payload_after_tfi: &[u8]) -> Vec<u8> {
    let mut body = vec![crate::constants::TFI_DEVICE];
    body.extend_from_slice(payload_after_tfi);
    let len = body.len() as u8;
    let mut frame = vec![0x00, 0x00, 0xFF, len, lcs(len)];
    frame.extend_from_slice(&body);
    frame.push(dcs(&body));
    frame.push(0x00);
    frame
}

/// The fixed application-level error frame `00 00 FF 01 FF 7F 81 00`.
#[doc(hidden)]
pub fn syntax_error_frame() -> Vec<u8> {
    vec![0x00, 0x00, 0xFF, 0x01, 0xFF, 0x7F, 0x81, 0x00]
}

/// A plausible GetFirmwareVersion response frame (PN532 v1.6).
#[doc(hidden)]
pub fn firmware_frame() -> Vec<u8> {
    device_frame(&[0x03, 0x32, 0x01, 0x06, 0x07])
}

/// A TgGetData response frame with the given status and initiator data.
#[doc(hidden)]
pub fn tg_get_data_frame(status: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x87, status];
    payload.extend_from_slice(data);
    device_frame(&payload)
}

/// Controller config with all timing shrunk for fast unit tests.
#[doc(hidden)]
pub fn fast_config() -> Pn532Config {
    Pn532Config {
        ready_timeout: std::time::Duration::from_millis(200),
        ack_timeout: std::time::Duration::from_millis(50),
        poll_interval: std::time::Duration::from_millis(10),
        max_retries: 1,
        ..Pn532Config::default()
    }
}

/// Build a MockTransport pre-seeded with the given exchanges and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_exchanges(exchanges: Vec<Vec<Vec<u8>>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for ex in exchanges {
        mock.push_exchange(ex);
    }
    Box::new(mock)
}

/// Convenience: a Pn532Controller over a scripted MockTransport that has
/// already completed its initialization handshake. Extra exchanges are
/// available to whatever the test runs next.
#[doc(hidden)]
pub fn initialized_mock_controller(extra: Vec<Vec<Vec<u8>>>) -> crate::Result<Pn532Controller> {
    let mut exchanges = vec![vec![ack_chunk(), firmware_frame()], vec![ack_chunk()]];
    exchanges.extend(extra);
    let mut controller = Pn532Controller::new(boxed_mock_with_exchanges(exchanges), fast_config());
    use crate::controller::TagEmulator;
    controller.initialize()?;
    Ok(controller)
}
