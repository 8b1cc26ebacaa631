// Aggregator for protocol integration tests located in `tests/protocol/`.
// Cargo treats each top-level file in `tests/` as an integration test crate;
// we include the per-topic files as submodules to keep the directory layout
// neat while still allowing `cargo test` to discover them.

#[path = "protocol/checksum_test.rs"]
mod checksum_test;

#[path = "protocol/frame_test.rs"]
mod frame_test;

#[path = "protocol/framer_test.rs"]
mod framer_test;

#[path = "protocol/ndef_test.rs"]
mod ndef_test;
