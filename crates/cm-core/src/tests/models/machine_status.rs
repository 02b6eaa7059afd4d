use crate::MachineStatus;

use std::str::FromStr;

#[test]
fn test_machine_status_as_str() {
    assert_eq!(MachineStatus::Available.as_str(), "available");
    assert_eq!(MachineStatus::InUse.as_str(), "in_use");
    assert_eq!(MachineStatus::Maintenance.as_str(), "maintenance");
}

#[test]
fn test_machine_status_from_str_round_trip() {
    for status in [
        MachineStatus::Available,
        MachineStatus::InUse,
        MachineStatus::Maintenance,
    ] {
        assert_eq!(MachineStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_machine_status_from_str_rejects_unknown() {
    let result = MachineStatus::from_str("scrapped");
    assert!(result.is_err());
}

#[test]
fn test_machine_status_default_is_available() {
    assert_eq!(MachineStatus::default(), MachineStatus::Available);
}
