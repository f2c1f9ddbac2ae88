//! Inventory aggregate: every slot of every shift

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::slot::slot_id;
use super::{Shift, Slot, SlotType};

/// One shift's docks and yard, each indexed by `number - 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInventory {
    pub docks: Vec<Slot>,
    pub yard: Vec<Slot>,
}

impl ShiftInventory {
    pub fn slots(&self, slot_type: SlotType) -> &[Slot] {
        match slot_type {
            SlotType::Dock => &self.docks,
            SlotType::Yard => &self.yard,
        }
    }

    pub fn slots_mut(&mut self, slot_type: SlotType) -> &mut Vec<Slot> {
        match slot_type {
            SlotType::Dock => &mut self.docks,
            SlotType::Yard => &mut self.yard,
        }
    }

    pub fn slot(&self, slot_type: SlotType, index: usize) -> Option<&Slot> {
        self.slots(slot_type).get(index)
    }

    pub fn slot_mut(&mut self, slot_type: SlotType, index: usize) -> Option<&mut Slot> {
        self.slots_mut(slot_type).get_mut(index)
    }

    /// Slot counts for the board summary: (occupied, total)
    pub fn occupancy(&self, slot_type: SlotType) -> (usize, usize) {
        let slots = self.slots(slot_type);
        (slots.iter().filter(|s| s.is_occupied()).count(), slots.len())
    }

    fn check_shape(&self, shift: Shift) -> Result<(), String> {
        for slot_type in SlotType::ALL {
            let slots = self.slots(slot_type);
            if slots.len() != slot_type.capacity() {
                return Err(format!(
                    "shift {} has {} {} slots, expected {}",
                    shift,
                    slots.len(),
                    slot_type.key(),
                    slot_type.capacity()
                ));
            }
            for (index, slot) in slots.iter().enumerate() {
                let number = index + 1;
                if slot.number != number
                    || slot.slot_type != slot_type
                    || slot.id != slot_id(shift, slot_type, number)
                {
                    return Err(format!(
                        "shift {} {} position {} holds slot '{}'",
                        shift,
                        slot_type.key(),
                        number,
                        slot.id
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Root aggregate. Serialized as `{"1": {...}, "2": {...}, "3": {...}}`;
/// deserializing anything of another shape fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Shift, ShiftInventory>",
    into = "BTreeMap<Shift, ShiftInventory>"
)]
pub struct Inventory {
    shifts: [ShiftInventory; 3],
}

impl Inventory {
    pub(crate) fn from_shifts(shifts: [ShiftInventory; 3]) -> Self {
        Self { shifts }
    }

    pub fn shift(&self, shift: Shift) -> &ShiftInventory {
        &self.shifts[shift.index()]
    }

    pub fn shift_mut(&mut self, shift: Shift) -> &mut ShiftInventory {
        &mut self.shifts[shift.index()]
    }

    pub fn replace_shift(&mut self, shift: Shift, shift_inventory: ShiftInventory) {
        self.shifts[shift.index()] = shift_inventory;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shift, &ShiftInventory)> {
        Shift::ALL.into_iter().zip(self.shifts.iter())
    }
}

impl TryFrom<BTreeMap<Shift, ShiftInventory>> for Inventory {
    type Error = String;

    fn try_from(mut map: BTreeMap<Shift, ShiftInventory>) -> Result<Self, Self::Error> {
        let mut take = |shift: Shift| -> Result<ShiftInventory, String> {
            let shift_inventory = map
                .remove(&shift)
                .ok_or_else(|| format!("missing shift {}", shift))?;
            shift_inventory.check_shape(shift)?;
            Ok(shift_inventory)
        };
        let shifts = [take(Shift::First)?, take(Shift::Second)?, take(Shift::Third)?];
        Ok(Self { shifts })
    }
}

impl From<Inventory> for BTreeMap<Shift, ShiftInventory> {
    fn from(inventory: Inventory) -> Self {
        Shift::ALL.into_iter().zip(inventory.shifts).collect()
    }
}
