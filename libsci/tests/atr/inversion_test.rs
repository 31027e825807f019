use crate::common::{self, fixtures};

use libsci::test_support::inverse_line_bytes;

#[test]
fn inverse_card_bytes_are_complemented() {
    let decoded = fixtures::conax_atr();
    let line = inverse_line_bytes(&decoded[1..]);
    assert_eq!(line[0], 0x03);

    let (res, _) = common::acquire(357, &line);
    let buf = res.unwrap();
    assert_eq!(buf.as_slice()[0], !0x03u8);
    assert_eq!(&buf.as_slice()[1..], &decoded[1..]);
}

#[test]
fn inverse_t0_drives_chain_walk() {
    // decoded T0 0x92: TA1 TD1, two historical bytes
    let decoded = [0x3B, 0x92, 0x11, 0x01, 0x68, 0x69];
    let line = inverse_line_bytes(&decoded[1..]);
    let (res, remaining) = common::acquire(357, &line);
    assert_eq!(res.unwrap().len(), decoded.len());
    assert_eq!(remaining.remaining(), 0);
}

#[test]
fn direct_convention_bytes_are_untouched() {
    let atr = fixtures::two_group_atr();
    let (res, _) = common::acquire(357, &atr);
    assert_eq!(res.unwrap().as_slice(), &atr[..]);
}
