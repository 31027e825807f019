use crate::common::{self, fixtures};

use libsci::Error;
use libsci::atr::{AtrValidator, Iso7816Validator, Validation};
use libsci::constants::MAX_ATR_SIZE;

#[test]
fn minimal_atr_reads_two_bytes() {
    let (res, line) = common::acquire(357, &[0x3B, 0x00, 0xEE]);
    let buf = res.unwrap();
    assert_eq!(buf.as_slice(), &[0x3B, 0x00]);
    // nothing beyond TS T0 is consumed
    assert_eq!(line.remaining(), 1);
}

#[test]
fn real_card_atrs_are_read_exactly() {
    for atr in [
        fixtures::irdeto_atr(),
        fixtures::conax_atr(),
        fixtures::two_group_atr(),
    ] {
        let mut line_bytes = atr.clone();
        line_bytes.push(0xEE);
        let (res, line) = common::acquire(357, &line_bytes);
        assert_eq!(res.unwrap().as_slice(), &atr[..]);
        assert_eq!(line.remaining(), 1);
    }
}

#[test]
fn tck_is_left_on_the_line() {
    // the engine stops after the historical bytes; TCK is not consumed
    let atr = fixtures::t1_atr_with_tck();
    let (res, line) = common::acquire(357, &atr);
    assert_eq!(res.unwrap().as_slice(), &atr[..4]);
    assert_eq!(line.remaining(), 1);
}

#[test]
fn read_atrs_validate() {
    for atr in [fixtures::conax_atr(), fixtures::two_group_atr()] {
        let (res, _) = common::acquire(357, &atr);
        let buf = res.unwrap();
        assert!(matches!(
            Iso7816Validator.validate(buf.as_slice()),
            Validation::Valid(_)
        ));
    }
}

#[test]
fn two_group_atr_structure() {
    let atr = match Iso7816Validator.validate(&fixtures::two_group_atr()) {
        Validation::Valid(atr) => atr,
        other => panic!("expected Valid, got {:?}", other),
    };
    assert_eq!(atr.groups().len(), 2);
    assert_eq!(atr.groups()[0].ta, Some(0x11));
    assert_eq!(atr.groups()[1].tc, Some(0x96));
    assert_eq!(atr.historical_bytes().len(), 7);
    assert_eq!(atr.protocols(), vec![0]);
}

#[test]
fn missing_t0_and_ts_are_hard_failures() {
    common::init_logging();
    let (res, _) = common::acquire(357, &[]);
    assert!(matches!(res, Err(Error::NoAtrData)));
    let (res, _) = common::acquire(357, &[0x3B]);
    assert!(matches!(res, Err(Error::InsufficientAtrData)));
}

#[test]
fn truncated_historical_bytes_keep_what_arrived() {
    common::init_logging();
    let atr = fixtures::irdeto_atr();
    let (res, _) = common::acquire(357, &atr[..10]);
    let buf = res.unwrap();
    assert_eq!(buf.len(), 10);
    assert_eq!(buf.as_slice(), &atr[..10]);
}

#[test]
fn buffer_never_exceeds_capacity() {
    let mut line = vec![0x3B, 0xFF];
    line.extend(std::iter::repeat_n(0xFF, 80));
    let (res, _) = common::acquire(357, &line);
    assert_eq!(res.unwrap().len(), MAX_ATR_SIZE);
}

#[test]
fn irdeto_bogus_ts_is_normalized_before_validation() -> anyhow::Result<()> {
    let mut line = fixtures::irdeto_atr();
    line[0] = 0xFD;
    let (res, _) = common::acquire(357, &line);
    let buf = res?;
    assert_eq!(buf.first(), Some(0x3B));
    Ok(())
}
