use nfcbridge::protocol::{Frame, Framer};
use nfcbridge::test_support::{device_frame, syntax_error_frame};

#[test]
fn ack_glued_to_response_with_leading_status_byte() {
    // An i2c read can return the status byte, the ACK and the start of the
    // response all at once.
    let mut framer = Framer::new();
    let mut chunk = vec![0x01];
    chunk.extend_from_slice(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
    chunk.extend_from_slice(&device_frame(&[0x03, 0x32, 0x01, 0x06, 0x07]));
    framer.feed(&chunk);

    assert!(framer.try_extract_ack());
    assert_eq!(
        framer.try_extract_frame(),
        Some(Frame::Response(vec![0x03, 0x32, 0x01, 0x06, 0x07]))
    );
}

#[test]
fn response_dribbling_in_one_byte_at_a_time() {
    let mut framer = Framer::new();
    let frame = device_frame(&[0x8D, 0x04]);
    for (i, byte) in frame.iter().enumerate() {
        framer.feed(&[*byte]);
        if i < frame.len() - 1 {
            assert_eq!(framer.try_extract_frame(), None, "byte {}", i);
        }
    }
    assert_eq!(
        framer.try_extract_frame(),
        Some(Frame::Response(vec![0x8D, 0x04]))
    );
}

#[test]
fn garbage_between_frames_is_skipped() {
    let mut framer = Framer::new();
    framer.feed(&[0xDE, 0xAD, 0xBE, 0xEF]);
    framer.feed(&device_frame(&[0x87, 0x00, 0xAA]));
    framer.feed(&[0x55, 0x55]);
    framer.feed(&device_frame(&[0x87, 0x00, 0xBB]));

    assert_eq!(
        framer.try_extract_frame(),
        Some(Frame::Response(vec![0x87, 0x00, 0xAA]))
    );
    assert_eq!(
        framer.try_extract_frame(),
        Some(Frame::Response(vec![0x87, 0x00, 0xBB]))
    );
    assert_eq!(framer.try_extract_frame(), None);
}

#[test]
fn syntax_error_frame_surfaces_as_such() {
    let mut framer = Framer::new();
    framer.feed(&syntax_error_frame());
    assert_eq!(framer.try_extract_frame(), Some(Frame::SyntaxError));
}

#[test]
fn two_acks_then_two_responses() {
    let mut framer = Framer::new();
    framer.feed(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
    framer.feed(&[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
    framer.feed(&device_frame(&[0x15]));

    assert!(framer.try_extract_ack());
    assert!(framer.try_extract_ack());
    assert!(!framer.try_extract_ack());
    assert_eq!(framer.try_extract_frame(), Some(Frame::Response(vec![0x15])));
}
