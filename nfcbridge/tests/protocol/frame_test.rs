use nfcbridge::protocol::information_frame;

#[test]
fn get_firmware_version_wire_image() {
    // The canonical frame for the simplest command, byte for byte.
    let frame = information_frame(&[0x02]).unwrap();
    assert_eq!(
        frame,
        vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]
    );
}

#[test]
fn tg_init_as_target_frame_is_consistent() {
    use nfcbridge::protocol::Command;

    let ndef = nfcbridge::ndef::encode_uri("https://example.com/r/abc").unwrap();
    let payload = Command::TgInitAsTarget { ndef }.encode();
    let frame = information_frame(&payload).unwrap();

    // len counts TFI + payload and its checksum cancels
    assert_eq!(frame[3] as usize, payload.len() + 1);
    assert_eq!(frame[3].wrapping_add(frame[4]), 0);

    // data checksum over TFI + payload cancels
    let body_end = frame.len() - 2;
    let sum = frame[5..body_end]
        .iter()
        .fold(0u8, |a, &b| a.wrapping_add(b));
    assert_eq!(sum.wrapping_add(frame[body_end]), 0);
}

#[test]
fn frame_rejects_payload_above_one_byte_length() {
    assert!(information_frame(&vec![0u8; 255]).is_err());
    assert!(information_frame(&vec![0u8; 254]).is_ok());
}
