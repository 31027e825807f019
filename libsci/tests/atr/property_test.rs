use crate::common;

use libsci::constants::MAX_ATR_SIZE;
use libsci::test_support::inverse_line_bytes;
use proptest::prelude::*;

/// Build a decoded ATR from per-group TA/TB/TC presence bits and a
/// historical byte count. Returns the ATR and its interface byte count.
fn build_atr(groups: &[u8], k: u8) -> (Vec<u8>, usize) {
    let mut atr = vec![0x3B];
    let next_td = |i: usize| if i + 1 < groups.len() { 0x80 } else { 0x00 };
    atr.push(groups[0] | next_td(0) | k);
    let mut interface = 0usize;
    for (i, bits) in groups.iter().enumerate() {
        for mask in [0x10u8, 0x20, 0x40] {
            if bits & mask != 0 {
                atr.push(0x5A);
                interface += 1;
            }
        }
        if next_td(i) != 0 {
            let td = groups[i + 1] | next_td(i + 1) | 0x01;
            atr.push(td);
            interface += 1;
        }
    }
    atr.extend(std::iter::repeat_n(0x48, k as usize));
    (atr, interface)
}

fn group_bits() -> impl Strategy<Value = u8> {
    (0u8..8).prop_map(|b| b << 4)
}

proptest! {
    #[test]
    fn chain_walk_consumes_exactly_announced_bytes(
        groups in prop::collection::vec(group_bits(), 1..6),
        k in 0u8..16,
    ) {
        let (atr, interface) = build_atr(&groups, k);
        prop_assume!(atr.len() <= MAX_ATR_SIZE);
        prop_assert_eq!(atr.len(), 2 + interface + k as usize);

        let mut line = atr.clone();
        line.extend_from_slice(&[0xEE, 0xEE]);
        let (res, rest) = common::acquire(357, &line);
        let buf = res.unwrap();
        prop_assert_eq!(buf.as_slice(), &atr[..]);
        prop_assert_eq!(rest.remaining(), 2);
    }

    #[test]
    fn inverse_convention_stores_complements(
        groups in prop::collection::vec(group_bits(), 1..4),
        k in 0u8..8,
    ) {
        let (atr, _) = build_atr(&groups, k);
        prop_assume!(atr.len() <= MAX_ATR_SIZE);
        let line = inverse_line_bytes(&atr[1..]);

        let (res, _) = common::acquire(357, &line);
        let buf = res.unwrap();
        prop_assert_eq!(buf.len(), atr.len());
        for (stored, raw) in buf.as_slice().iter().zip(line.iter()) {
            prop_assert_eq!(*stored, !*raw);
        }
    }

    #[test]
    fn truncated_line_never_panics(
        groups in prop::collection::vec(group_bits(), 1..6),
        k in 0u8..16,
        cut in 2usize..40,
    ) {
        let (atr, _) = build_atr(&groups, k);
        let cut = cut.min(atr.len());
        let (res, _) = common::acquire(357, &atr[..cut]);
        let buf = res.unwrap();
        prop_assert!(buf.len() <= cut);
        prop_assert!(buf.len() <= MAX_ATR_SIZE);
    }
}
