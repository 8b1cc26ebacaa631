// nfc-bridge-rs/nfcbridge/src/protocol/frame.rs

use crate::constants::{
    ACK_FRAME, MAX_FRAME_DATA, POSTAMBLE, PREAMBLE, SYNTAX_ERROR_BYTE, TFI_HOST,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// A frame extracted from the receive stream, classified by its body.
///
/// ACK frames never surface here; the framer consumes them separately via
/// `try_extract_ack` (and silently skips them during frame extraction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Well-formed information frame from the PN532 (TFI 0xD5); payload is
    /// everything after the TFI byte.
    Response(Vec<u8>),
    /// The fixed application-level error frame (body `[0x7F]`).
    SyntaxError,
}

/// Build a host->PN532 information frame around `payload`:
/// `00 00 FF len ~len+1 D4 payload... dcs 00` where `len` counts the TFI
/// byte plus the payload and both checksums are two's-complement sums.
pub fn information_frame(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_FRAME_DATA {
        return Err(Error::InvalidLength {
            expected: MAX_FRAME_DATA,
            actual: payload.len(),
        });
    }

    let len = (payload.len() + 1) as u8;
    let mut out = Vec::with_capacity(3 + 2 + 1 + payload.len() + 2);
    out.extend_from_slice(&PREAMBLE);
    out.push(len);
    out.push(lcs(len));
    out.push(TFI_HOST);
    out.extend_from_slice(payload);

    let mut body = Vec::with_capacity(payload.len() + 1);
    body.push(TFI_HOST);
    body.extend_from_slice(payload);
    out.push(dcs(&body));
    out.push(POSTAMBLE);
    Ok(out)
}

/// Classify a checksum-verified frame body (the `len` bytes starting at the
/// TFI position). Returns None for bodies the bridge has no business with
/// (host-direction echo, unknown TFI); callers resynchronize past those.
pub fn classify_body(body: &[u8]) -> Option<Frame> {
    if body == [SYNTAX_ERROR_BYTE] {
        return Some(Frame::SyntaxError);
    }
    match body.first() {
        Some(&crate::constants::TFI_DEVICE) => Some(Frame::Response(body[1..].to_vec())),
        _ => None,
    }
}

/// True if `buf[at..]` starts with the six-byte ACK literal.
pub fn is_ack_at(buf: &[u8], at: usize) -> bool {
    buf.len() >= at + ACK_FRAME.len() && buf[at..at + ACK_FRAME.len()] == ACK_FRAME
}
