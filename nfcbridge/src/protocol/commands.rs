// nfc-bridge-rs/nfcbridge/src/protocol/commands.rs

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_SAM_CONFIGURATION, CMD_TG_GET_DATA, CMD_TG_INIT_AS_TARGET,
    SAM_ARGS, TG_FELICA_PARAMS_LEN, TG_NFCID1, TG_NFCID3_LEN, TG_SEL_RES, TG_SENS_RES,
};

/// High-level Command enum. The bridge only ever issues these four; new
/// commands should be added here with their encoder below.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration,
    /// Enter card-emulation mode advertising `ndef` as the general bytes.
    TgInitAsTarget { ndef: Vec<u8> },
    TgGetData,
}

impl Command {
    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration => CMD_SAM_CONFIGURATION,
            Self::TgInitAsTarget { .. } => CMD_TG_INIT_AS_TARGET,
            Self::TgGetData => CMD_TG_GET_DATA,
        }
    }

    /// The code the PN532 answers with (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw frame payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => vec![CMD_GET_FIRMWARE_VERSION],
            Self::SamConfiguration => {
                let mut buf = Vec::with_capacity(1 + SAM_ARGS.len());
                buf.push(CMD_SAM_CONFIGURATION);
                buf.extend_from_slice(&SAM_ARGS);
                buf
            }
            Self::TgInitAsTarget { ndef } => encode_tg_init_as_target(ndef),
            Self::TgGetData => vec![CMD_TG_GET_DATA],
        }
    }
}

/// TgInitAsTarget parameter block:
/// `mode | sens_res | nfcid1t | sel_res | felica(18x00) | nfcid3t(10x00) |
/// L_gt gt | L_tk`. The NDEF message rides in the general bytes.
fn encode_tg_init_as_target(ndef: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(37 + ndef.len());
    buf.push(CMD_TG_INIT_AS_TARGET);
    buf.push(0x00); // mode: passive only not forced, DEP allowed
    buf.extend_from_slice(&TG_SENS_RES);
    buf.extend_from_slice(&TG_NFCID1);
    buf.push(TG_SEL_RES);
    buf.extend_from_slice(&[0u8; TG_FELICA_PARAMS_LEN]);
    buf.extend_from_slice(&[0u8; TG_NFCID3_LEN]);
    buf.push(ndef.len() as u8);
    buf.extend_from_slice(ndef);
    buf.push(0x00); // no historical bytes
    buf
}
