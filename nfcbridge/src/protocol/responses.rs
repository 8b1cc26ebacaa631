// nfc-bridge-rs/nfcbridge/src/protocol/responses.rs

use std::convert::TryFrom;

use crate::protocol::parser::{byte_at, ensure_len, expect_response_code};
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion response payload (after the TFI byte):
/// response code 0x03 followed by `{IC, Ver, Rev, Support}`.
pub fn decode_firmware_version(payload: &[u8]) -> Result<FirmwareVersion> {
    expect_response_code(payload, 0x03)?;
    ensure_len(payload, 5)?;
    FirmwareVersion::try_from(&payload[1..5])
}

/// Decode a TgGetData response payload: response code 0x87, one status byte
/// (0x00 = OK), then whatever the initiator transmitted.
pub fn decode_tg_get_data(payload: &[u8]) -> Result<(u8, Vec<u8>)> {
    expect_response_code(payload, 0x87)?;
    let status = byte_at(payload, 1)?;
    Ok((status, payload[2..].to_vec()))
}
