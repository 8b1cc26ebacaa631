use nfcbridge::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xd4, 0x02]), 0x2a);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn checksums_cancel_for_every_length() {
    for len in 0u8..=255 {
        assert_eq!(len.wrapping_add(lcs(len)), 0);
    }
}
