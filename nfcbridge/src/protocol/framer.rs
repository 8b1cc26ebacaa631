// nfc-bridge-rs/nfcbridge/src/protocol/framer.rs

use crate::constants::{ACK_FRAME, PREAMBLE};
use crate::protocol::frame::{classify_body, is_ack_at, Frame};

/// Streaming receive parser.
///
/// I2C reads split and merge frames arbitrarily: an ACK may arrive glued to
/// the response that follows it, and a response may span several reads. The
/// framer accumulates chunks in an append-only buffer and extracts complete
/// frames with explicit resynchronization rules, so callers never need a
/// whole frame per read.
#[derive(Debug, Default)]
pub struct Framer {
    buf: Vec<u8>,
}

impl Framer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything buffered (pre-command hygiene).
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append a chunk read from the transport.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Scan for the six-byte ACK literal; consume through its last byte when
    /// found. Bytes before the ACK are discarded with it.
    pub fn try_extract_ack(&mut self) -> bool {
        if self.buf.len() < ACK_FRAME.len() {
            return false;
        }
        for i in 0..=self.buf.len() - ACK_FRAME.len() {
            if is_ack_at(&self.buf, i) {
                self.buf.drain(..i + ACK_FRAME.len());
                return true;
            }
        }
        false
    }

    /// Advance to the next `00 00 FF` header and try to extract one complete,
    /// checksum-verified frame.
    ///
    /// Returns None while the frame is still incomplete. On any length or
    /// data checksum violation, or an unexpected TFI, the three header bytes
    /// at the current match are dropped and the scan restarts (silent
    /// resync). ACK frames encountered here are skipped. Garbage ahead of a
    /// header is discarded, except the final two buffered bytes, so a header
    /// split across chunks is never lost.
    pub fn try_extract_frame(&mut self) -> Option<Frame> {
        loop {
            let header = match find_header(&self.buf) {
                Some(h) => h,
                None => {
                    let keep_from = self.buf.len().saturating_sub(2);
                    self.buf.drain(..keep_from);
                    return None;
                }
            };
            if header > 0 {
                self.buf.drain(..header);
            }

            if self.buf.len() < 5 {
                return None;
            }
            let len = self.buf[3] as usize;
            let len_checksum = self.buf[4];

            // ACK has the length field 0x00 0xFF; skip it here, it carries
            // no body and try_extract_ack owns its semantics.
            if len == 0 && len_checksum == 0xFF {
                if self.buf.len() < ACK_FRAME.len() {
                    return None;
                }
                self.buf.drain(..ACK_FRAME.len());
                continue;
            }

            if (len as u8).wrapping_add(len_checksum) != 0 {
                self.buf.drain(..PREAMBLE.len());
                continue;
            }

            let total = 5 + len + 2;
            if self.buf.len() < total {
                return None;
            }

            let body = &self.buf[5..5 + len];
            let data_checksum = self.buf[5 + len];
            let sum = body.iter().fold(0u8, |a, &b| a.wrapping_add(b));
            if sum.wrapping_add(data_checksum) != 0 {
                self.buf.drain(..PREAMBLE.len());
                continue;
            }

            match classify_body(body) {
                Some(frame) => {
                    self.buf.drain(..total);
                    return Some(frame);
                }
                None => {
                    // Host-direction echo or unknown TFI
                    self.buf.drain(..PREAMBLE.len());
                    continue;
                }
            }
        }
    }
}

fn find_header(buf: &[u8]) -> Option<usize> {
    buf.windows(PREAMBLE.len()).position(|w| w == PREAMBLE)
}
