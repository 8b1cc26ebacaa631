use nfcbridge::ndef::{decode_uri, encode_uri, URI_PREFIXES};

#[test]
fn https_receipt_vector() {
    let msg = encode_uri("https://example.com/r/abc").unwrap();
    assert_eq!(msg[0], 0xD1); // MB+ME, SR, TNF=001
    assert_eq!(msg[1], 0x01);
    assert_eq!(msg[2], 0x12); // 1 + 17
    assert_eq!(msg[3], 0x55); // "U"
    assert_eq!(msg[4], 0x04); // https://
    assert_eq!(&msg[5..], b"example.com/r/abc");
}

#[test]
fn tel_vector() {
    let msg = encode_uri("tel:+8210123456789").unwrap();
    assert_eq!(&msg[..5], &[0xD1, 0x01, 0x0F, 0x55, 0x05]);
    assert_eq!(&msg[5..], b"+8210123456789");
}

#[test]
fn roundtrip_across_the_whole_table() {
    for (code, prefix) in URI_PREFIXES.iter().enumerate() {
        let url = format!("{}path/{}", prefix, code);
        let decoded = decode_uri(&encode_uri(&url).unwrap()).unwrap();
        assert_eq!(decoded, url, "prefix {:#04x}", code);
    }
}

#[test]
fn message_fits_tg_init_as_target() {
    // The whole message must stay within the one-byte general-bytes field.
    let msg = encode_uri("https://example.com/r/abc").unwrap();
    assert!(msg.len() <= 255);
    assert!(msg.len() <= 256);
}
