// nfc-bridge-rs/nfcbridge/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod framer;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::{information_frame, Frame};
pub use framer::Framer;
pub use responses::{decode_firmware_version, decode_tg_get_data};
