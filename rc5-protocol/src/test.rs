use super::*;

fn halves(frame: &Frame) -> ([Symbol; 64], usize) {
    let mut out = [Symbol::Space; 64];
    let mut n = 0;
    for s in frame.symbols() {
        out[n] = s;
        n += 1;
    }
    (out, n)
}

#[test]
fn test_constants() {
    assert_eq!(88886, MIN_GAP_US);
    assert_eq!(12, RC5_BITS);
    assert_eq!(14, RC5X_BITS);
}

#[test]
fn test_encode_rc5() {
    assert_eq!(362, encode_rc5(5, 42, false));
    assert_eq!(362 | 0x800, encode_rc5(5, 42, true));
}

#[test]
fn test_encode_rc5_masks_fields() {
    assert_eq!(0x7ff, encode_rc5(0xff, 0xff, false));
}

#[test]
fn test_encode_rc5x() {
    // Commands below 64 match plain RC-5
    assert_eq!(encode_rc5(5, 42, false), encode_rc5x(5, 42, false));
    assert_eq!(0x2000 | 362, encode_rc5x(5, 42 | 0x40, false));
}

#[test]
fn test_toggle_is_self_inverse() {
    let data = encode_rc5(5, 42, false) as u64;
    let toggled = toggle_rc5(data);
    assert_ne!(data, toggled);
    assert!(is_toggled(toggled));
    assert_eq!(data, toggle_rc5(toggled));
}

#[test]
fn test_command() {
    let mut cmd = Rc5Command::new(5, 42);
    assert_eq!(362, cmd.encode());
    cmd.flip_toggle();
    assert_eq!(362 | 0x800, cmd.encode());
    assert!(cmd.toggle);
    cmd.flip_toggle();
    assert!(!cmd.toggle);
    assert_eq!(362, cmd.encode());
    assert_eq!(0x2000 | (5 << 6) | 0x3f, Rc5Command::new(5, 0x7f).encode_x());
}

#[test]
fn test_frame_oversized() {
    assert_eq!(None, Frame::new(1, 65));
    assert!(Frame::new(1, 64).is_some());
}

#[test]
fn test_frame_standard() {
    let frame = Frame::new(362, RC5_BITS).unwrap();
    assert!(frame.field_bit());
    assert!(!frame.is_extended());
    assert_eq!(12, frame.data_bits());
    assert_eq!(28, frame.symbols().len());
}

#[test]
fn test_frame_extended_field_bit() {
    // Bit 13 set: field bit is sent as 0
    let frame = Frame::new(0x2000 | 362, RC5X_BITS).unwrap();
    assert!(frame.is_extended());
    assert!(!frame.field_bit());
    assert_eq!(13, frame.data_bits());

    let frame = Frame::new(362, RC5X_BITS).unwrap();
    assert!(frame.field_bit());
    assert_eq!(13, frame.data_bits());
}

#[test]
fn test_frame_manchester() {
    use Symbol::{Mark as M, Space as S};

    // Start bits 1, 1 then data 1, 0
    let frame = Frame::new(0b10, 2).unwrap();
    let (out, n) = halves(&frame);
    assert_eq!([S, M, S, M, S, M, M, S], out[..n]);

    // Field bit 0 and 13 data bits 0b0_0000_0000_0001
    let frame = Frame::new(0x2001, 14).unwrap();
    let (out, n) = halves(&frame);
    assert_eq!(30, n);
    assert_eq!([S, M, M, S], out[..4]);
    assert_eq!([M, S], out[4..6]);
    assert_eq!([S, M], out[28..30]);
}

#[test]
fn test_frame_no_data_bits() {
    let frame = Frame::new(0, 0).unwrap();
    let (out, n) = halves(&frame);
    assert_eq!(4, n);
    assert_eq!([Symbol::Space, Symbol::Mark, Symbol::Space, Symbol::Mark], out[..n]);
}

#[test]
fn test_frame_full_width() {
    let frame = Frame::new(u64::MAX, 64).unwrap();
    assert!(!frame.field_bit());
    assert_eq!(63, frame.data_bits());
    assert!(frame.symbols().skip(4).step_by(2).all(|s| s == Symbol::Space));
}
