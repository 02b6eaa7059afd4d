use crate::{Machine, MachineStatus};

fn sample_machine(status: MachineStatus) -> Machine {
    Machine {
        id: 4,
        project_id: 1,
        name: "Excavator 330".to_string(),
        machine_type: "excavator".to_string(),
        brand: "Caterpillar".to_string(),
        status,
    }
}

#[test]
fn test_machine_is_available() {
    assert!(sample_machine(MachineStatus::Available).is_available());
    assert!(!sample_machine(MachineStatus::InUse).is_available());
    assert!(!sample_machine(MachineStatus::Maintenance).is_available());
}
