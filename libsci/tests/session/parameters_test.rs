use libsci::params::{ParameterUpdate, SessionParameters};
use libsci::test_support::mock_reader;
use libsci::HardwareVariant;

fn held() -> SessionParameters {
    SessionParameters {
        t: 14,
        fs: 6,
        etu: 625,
        egt: 0,
        wwt: 0,
        bwt: 0,
        cwt: 0,
        p: 2,
        i: 1,
        clock_stop_polarity: 1,
        check: 2,
        u: 3,
    }
}

#[test]
fn zero_etu_keeps_reader_value() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    control.set_held_parameters(held());

    reader.write_settings(&ParameterUpdate::new(14, 6)).unwrap();
    assert_eq!(control.held_parameters().etu, 625);

    reader
        .write_settings(&ParameterUpdate::new(0, 5).etu(372))
        .unwrap();
    assert_eq!(control.held_parameters().etu, 372);
}

#[test]
fn zero_parity_and_inversion_keep_reader_values() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    control.set_held_parameters(held());

    reader.write_settings(&ParameterUpdate::new(0, 5)).unwrap();
    let p = reader.parameters().unwrap();
    assert_eq!((p.p, p.i), (2, 1));

    reader
        .write_settings(&ParameterUpdate::new(0, 5).parity(1).inversion(2))
        .unwrap();
    let p = reader.parameters().unwrap();
    assert_eq!((p.p, p.i), (1, 2));
}

#[test]
fn reader_owned_fields_are_preserved() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    control.set_held_parameters(held());

    reader
        .write_settings(
            &ParameterUpdate::new(1, 5)
                .waiting_times(1000, 2000, 3000)
                .egt(2),
        )
        .unwrap();
    let p = control.held_parameters();
    assert_eq!(p.t, 1);
    assert_eq!((p.wwt, p.bwt, p.cwt, p.egt), (1000, 2000, 3000, 2));
    assert_eq!((p.clock_stop_polarity, p.check, p.u), (1, 2, 3));
}
