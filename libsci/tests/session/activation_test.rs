use libsci::control::ControlCommand;
use libsci::test_support::mock_reader;
use libsci::{CardStatus, Error, HardwareVariant};

#[test]
fn generic_activation_queries_activated() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    reader.activate().unwrap();
    assert_eq!(
        control.commands(),
        vec![ControlCommand::GetCardPresent, ControlCommand::GetCardActivated]
    );
}

#[test]
fn sh4_activation_queries_presence() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Sh4, &[]);
    reader.activate().unwrap();
    assert_eq!(
        control.commands(),
        vec![ControlCommand::GetCardPresent, ControlCommand::GetCardPresent]
    );
}

#[test]
fn activation_reads_no_atr() {
    let (mut reader, _, line) = mock_reader(357, HardwareVariant::Generic, &[0x3B, 0x00]);
    reader.activate().unwrap();
    assert_eq!(line.remaining(), 2);
}

#[test]
fn deactivate_and_status() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    control.set_card_present(true);
    assert_eq!(reader.status().unwrap(), CardStatus::Present);

    reader.deactivate().unwrap();
    assert_eq!(control.count(ControlCommand::SetDeactivate), 1);

    control.set_card_present(false);
    assert!(!reader.status().unwrap().is_present());
}

#[test]
fn failing_control_channel_surfaces_error() {
    let (mut reader, control, _) = mock_reader(357, HardwareVariant::Generic, &[]);
    control.set_failures(1);
    assert!(matches!(reader.activate(), Err(Error::Control(_))));
}
