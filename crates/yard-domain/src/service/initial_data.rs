//! Fresh (all empty) inventory generation

use crate::model::{Inventory, Shift, ShiftInventory, Slot, SlotType};

/// Empty slots for one shift
pub fn generate_shift(shift: Shift) -> ShiftInventory {
    let build = |slot_type: SlotType| -> Vec<Slot> {
        (1..=slot_type.capacity())
            .map(|number| Slot::at(shift, slot_type, number))
            .collect()
    };
    ShiftInventory {
        docks: build(SlotType::Dock),
        yard: build(SlotType::Yard),
    }
}

/// Empty inventory for all shifts; also the baseline for cleaning
pub fn generate_initial() -> Inventory {
    Inventory::from_shifts(Shift::ALL.map(generate_shift))
}
