// nfc-bridge-rs/nfcbridge/tests/common/mod.rs

pub mod fixtures;
