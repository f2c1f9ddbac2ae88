//! Slot record: one loading dock (andén) or yard space (patio)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Shift;

/// Number of loading docks per shift
pub const DOCK_COUNT: usize = 18;

/// Number of yard spaces per shift
pub const YARD_COUNT: usize = 20;

/// Trailer lengths offered by the edit form (feet)
pub const TRAILER_SIZES: [&str; 4] = ["53", "48", "40", "3.5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotType {
    #[serde(rename = "docks")]
    Dock,
    #[serde(rename = "yard")]
    Yard,
}

impl SlotType {
    pub const ALL: [SlotType; 2] = [SlotType::Dock, SlotType::Yard];

    /// Slots of this type per shift
    pub fn capacity(self) -> usize {
        match self {
            SlotType::Dock => DOCK_COUNT,
            SlotType::Yard => YARD_COUNT,
        }
    }

    /// Location label used in spreadsheets ("Andén 5", "Patio 12")
    pub fn label(self) -> &'static str {
        match self {
            SlotType::Dock => "Andén",
            SlotType::Yard => "Patio",
        }
    }

    /// Key used in persisted JSON and on the command line
    pub fn key(self) -> &'static str {
        match self {
            SlotType::Dock => "docks",
            SlotType::Yard => "yard",
        }
    }

    fn id_prefix(self) -> char {
        match self {
            SlotType::Dock => 'D',
            SlotType::Yard => 'Y',
        }
    }

    /// Statuses a slot of this type may hold
    pub fn allowed_statuses(self) -> &'static [Status] {
        match self {
            SlotType::Dock => &[Status::Empty, Status::Ramped, Status::Fronted, Status::Loaded],
            SlotType::Yard => &[Status::Empty, Status::Loaded],
        }
    }

    pub fn allows(self, status: Status) -> bool {
        self.allowed_statuses().contains(&status)
    }
}

impl std::fmt::Display for SlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Occupancy status. Persisted with the labels operators use on paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Vacía")]
    Empty,
    #[serde(rename = "Enrampada")]
    Ramped,
    #[serde(rename = "Frenteada")]
    Fronted,
    #[serde(rename = "Cargada")]
    Loaded,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Empty => "Vacía",
            Status::Ramped => "Enrampada",
            Status::Fronted => "Frenteada",
            Status::Loaded => "Cargada",
        }
    }

    /// Exact label match, e.g. "Cargada"
    pub fn from_label(label: &str) -> Option<Status> {
        [Status::Empty, Status::Ramped, Status::Fronted, Status::Loaded]
            .into_iter()
            .find(|s| s.label() == label)
    }

    /// Statuses that require the right seal on manual save
    pub fn requires_seal(self) -> bool {
        matches!(self, Status::Fronted | Status::Loaded)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable slot identifier, e.g. "D1-5" for shift 1, dock 5
pub fn slot_id(shift: Shift, slot_type: SlotType, number: usize) -> String {
    format!("{}{}-{}", slot_type.id_prefix(), shift.number(), number)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub number: usize,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    #[serde(default)]
    pub size: String,
    /// Número económico of the tractor/trailer
    #[serde(rename = "eco", default)]
    pub economic_number: String,
    /// Carrier (línea transportista)
    #[serde(rename = "line", default)]
    pub carrier_line: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub seal_left: String,
    #[serde(default)]
    pub seal_right: String,
    #[serde(default)]
    pub observations: String,
    /// Last manual save; imports leave it untouched
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Slot {
    pub fn empty(slot_type: SlotType, number: usize, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number,
            slot_type,
            size: String::new(),
            economic_number: String::new(),
            carrier_line: String::new(),
            status: Status::Empty,
            seal_left: String::new(),
            seal_right: String::new(),
            observations: String::new(),
            updated_at: None,
        }
    }

    /// Empty slot with the canonical id for its position
    pub fn at(shift: Shift, slot_type: SlotType, number: usize) -> Self {
        Self::empty(slot_type, number, slot_id(shift, slot_type, number))
    }

    /// Same identity, every other field reset
    pub fn cleared(&self) -> Self {
        Self::empty(self.slot_type, self.number, self.id.clone())
    }

    pub fn is_occupied(&self) -> bool {
        self.status != Status::Empty
    }

    /// Empty status but a truck is still recorded (eco or carrier filled in)
    pub fn has_unit_data(&self) -> bool {
        !self.economic_number.is_empty() || !self.carrier_line.is_empty()
    }

    /// "Andén 5" / "Patio 12"
    pub fn location(&self) -> String {
        format!("{} {}", self.slot_type.label(), self.number)
    }
}

/// Editable part of a slot, as carried by the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub size: String,
    pub economic_number: String,
    pub carrier_line: String,
    pub status: Status,
    pub seal_left: String,
    pub seal_right: String,
    pub observations: String,
}

impl SlotDraft {
    /// Stamp the draft onto `slot`, keeping its identity
    pub fn apply_to(self, slot: &Slot, saved_at: DateTime<Utc>) -> Slot {
        Slot {
            id: slot.id.clone(),
            number: slot.number,
            slot_type: slot.slot_type,
            size: self.size,
            economic_number: self.economic_number,
            carrier_line: self.carrier_line,
            status: self.status,
            seal_left: self.seal_left,
            seal_right: self.seal_right,
            observations: self.observations,
            updated_at: Some(saved_at),
        }
    }
}

impl From<&Slot> for SlotDraft {
    fn from(slot: &Slot) -> Self {
        Self {
            size: slot.size.clone(),
            economic_number: slot.economic_number.clone(),
            carrier_line: slot.carrier_line.clone(),
            status: slot.status,
            seal_left: slot.seal_left.clone(),
            seal_right: slot.seal_right.clone(),
            observations: slot.observations.clone(),
        }
    }
}
