// nfc-bridge-rs/nfcbridge/src/constants.rs
//! Wire protocol constants used across the crate

/// PN532 information frame preamble: 0x00 0x00 0xFF
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 information frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// Type-of-Frame Indicator, host -> PN532
pub const TFI_HOST: u8 = 0xD4;

/// Type-of-Frame Indicator, PN532 -> host
pub const TFI_DEVICE: u8 = 0xD5;

/// Six-byte acknowledgement frame sent by the PN532 after every command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Body of the fixed syntax-error frame (application-level error)
pub const SYNTAX_ERROR_BYTE: u8 = 0x7F;

/// Maximum data bytes per information frame (len counts TFI + data, one byte)
pub const MAX_FRAME_DATA: usize = 254;

/// PN532 command codes used by the bridge
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const CMD_TG_GET_DATA: u8 = 0x86;
pub const CMD_TG_INIT_AS_TARGET: u8 = 0x8C;

/// SAMConfiguration arguments: normal mode, 1 s timeout (0x14 * 50 ms), use IRQ
pub const SAM_ARGS: [u8; 3] = [0x01, 0x14, 0x01];

/// TgInitAsTarget mifare parameters: SENS_RES, NFCID1t, SEL_RES
pub const TG_SENS_RES: [u8; 2] = [0x04, 0x00];
pub const TG_NFCID1: [u8; 3] = [0x12, 0x34, 0x56];
pub const TG_SEL_RES: u8 = 0x20;

/// TgInitAsTarget felica parameter block length (unused, zeroed)
pub const TG_FELICA_PARAMS_LEN: usize = 18;

/// TgInitAsTarget NFCID3t length (unused, zeroed)
pub const TG_NFCID3_LEN: usize = 10;

/// Default PN532 7-bit I2C address
pub const DEFAULT_I2C_ADDRESS: u8 = 0x24;

/// Status byte low bit set = PN532 has a frame for us
pub const READY_BIT: u8 = 0x01;

/// Bytes pulled off the bus per poll while waiting for a frame
pub const READ_CHUNK: usize = 64;

/// Number of drain reads performed before each command while ready stays high
pub const FLUSH_READS: usize = 3;

/// Settle delay between the pre-command flush and the actual write
pub const SETTLE_DELAY_MS: u64 = 50;

/// ACK must arrive within this window after a command write
pub const ACK_TIMEOUT_MS: u64 = 100;

/// Sleep between ready polls while waiting for an ACK
pub const ACK_POLL_MS: u64 = 5;

/// Bus quiesce delay during reinitialize()
pub const REINIT_DELAY_MS: u64 = 1000;
