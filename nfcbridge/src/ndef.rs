// nfc-bridge-rs/nfcbridge/src/ndef.rs
//! NDEF URI record encoder/decoder (NFC Forum RTD-URI 1.0).
//!
//! The bridge advertises exactly one message shape: a single short record
//! with MB+ME set, TNF 001 (well-known), type `"U"`, and a one-byte
//! abbreviation prefix ahead of the URL remainder.

use crate::{Error, Result};

/// Record header: MB=1, ME=1, CF=0, SR=1, IL=0, TNF=001
pub const URI_RECORD_HEADER: u8 = 0xD1;

/// Well-known type byte `"U"`
pub const URI_TYPE: u8 = 0x55;

/// Longest URL remainder that still fits a short record: the payload length
/// byte covers the prefix code plus the remainder.
pub const MAX_URL_REMAINDER: usize = 254;

/// RTD-URI abbreviation table, indexed by prefix code 0x00-0x23.
pub const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Pick the abbreviation for `url`: longest matching prefix wins, 0x00 when
/// nothing matches. Iterating the whole table and keeping the longest hit
/// keeps the choice independent of table order ("https://www." must beat
/// "https://").
fn abbreviate(url: &str) -> (u8, &str) {
    let mut best: (u8, usize) = (0x00, 0);
    for (code, prefix) in URI_PREFIXES.iter().enumerate().skip(1) {
        if prefix.len() > best.1 && url.starts_with(prefix) {
            best = (code as u8, prefix.len());
        }
    }
    (best.0, &url[best.1..])
}

/// Encode `url` as a single-record NDEF message.
pub fn encode_uri(url: &str) -> Result<Vec<u8>> {
    let (code, remainder) = abbreviate(url);
    if remainder.len() > MAX_URL_REMAINDER {
        return Err(Error::UrlTooLong {
            len: remainder.len(),
            max: MAX_URL_REMAINDER,
        });
    }

    let mut out = Vec::with_capacity(5 + remainder.len());
    out.push(URI_RECORD_HEADER);
    out.push(0x01); // type length
    out.push((1 + remainder.len()) as u8); // payload length: prefix code + remainder
    out.push(URI_TYPE);
    out.push(code);
    out.extend_from_slice(remainder.as_bytes());
    Ok(out)
}

/// Decode a message produced by [`encode_uri`] back into the URL. Inverse of
/// encode for every prefix code including 0x00.
pub fn decode_uri(message: &[u8]) -> Result<String> {
    if message.len() < 5 {
        return Err(Error::InvalidLength {
            expected: 5,
            actual: message.len(),
        });
    }
    if message[0] != URI_RECORD_HEADER {
        return Err(Error::FrameFormat(format!(
            "not a short MB+ME URI record header: {:#04x}",
            message[0]
        )));
    }
    if message[1] != 0x01 || message[3] != URI_TYPE {
        return Err(Error::FrameFormat("record type is not \"U\"".into()));
    }
    let payload_len = message[2] as usize;
    if payload_len == 0 || message.len() != 4 + payload_len {
        return Err(Error::InvalidLength {
            expected: 4 + payload_len,
            actual: message.len(),
        });
    }

    let code = message[4] as usize;
    let prefix = URI_PREFIXES
        .get(code)
        .ok_or_else(|| Error::FrameFormat(format!("unknown URI prefix code {:#04x}", code)))?;

    let remainder = std::str::from_utf8(&message[5..])
        .map_err(|e| Error::FrameFormat(format!("URI remainder is not UTF-8: {}", e)))?;

    let mut url = String::with_capacity(prefix.len() + remainder.len());
    url.push_str(prefix);
    url.push_str(remainder);
    Ok(url)
}
