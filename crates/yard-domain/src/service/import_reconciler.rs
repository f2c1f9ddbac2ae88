//! Spreadsheet import reconciliation
//!
//! Rows are classified by their location label ("Andén 5", "Patio 12"),
//! their status is inferred from whatever the sheet provides, and the data
//! is merged into the target shift. Rows that cannot be placed are skipped
//! and only show up as a lower count.

use serde::Serialize;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::model::{SheetRow, ShiftInventory, SlotType, Status};

const DOCK_KEYWORD: &str = "anden";
const FRONTED_KEYWORD: &str = "frenteada";
const YARD_KEYWORD: &str = "patio";

/// Rows merged per slot type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub docks: usize,
    pub yard: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.docks + self.yard
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub shift_inventory: ShiftInventory,
    pub summary: ImportSummary,
}

/// Merge `rows` into a copy of `current`.
pub fn reconcile(rows: &[SheetRow], current: &ShiftInventory) -> ReconcileOutcome {
    let mut merged = current.clone();
    let mut summary = ImportSummary::default();

    for (row_idx, row) in rows.iter().enumerate() {
        let Some((slot_type, number)) = place_row(row) else {
            debug!(row = row_idx + 1, label = row.location(), "import row skipped");
            continue;
        };

        let status = resolve_status(row, slot_type);
        let Some(slot) = merged.slot_mut(slot_type, number - 1) else {
            continue;
        };
        slot.size = row.size().to_string();
        slot.economic_number = row.economic_number().to_string();
        slot.carrier_line = row.carrier_line().to_string();
        slot.seal_left = row.seal_1().to_string();
        slot.seal_right = row.seal_2().to_string();
        slot.observations = row.observations().to_string();
        slot.status = status;

        match slot_type {
            SlotType::Dock => summary.docks += 1,
            SlotType::Yard => summary.yard += 1,
        }
    }

    ReconcileOutcome {
        shift_inventory: merged,
        summary,
    }
}

/// Slot type and number a row targets, or None when the row is skipped
fn place_row(row: &SheetRow) -> Option<(SlotType, usize)> {
    let label = normalize_location(row.location());
    if label.is_empty() {
        return None;
    }

    let slot_type = classify(&label)?;
    let number = trailing_number(&label)?;
    if number == 0 || number > slot_type.capacity() {
        return None;
    }

    // "Patio N" rows with nothing in them are headers/separators in the source sheets
    if slot_type == SlotType::Yard
        && row.economic_number().is_empty()
        && row.seal_1().is_empty()
        && row.seal_2().is_empty()
        && row.size().is_empty()
    {
        return None;
    }

    Some((slot_type, number))
}

/// Lowercase, trimmed, without accents: "  Andén 5 " -> "anden 5"
pub fn normalize_location(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

fn classify(normalized: &str) -> Option<SlotType> {
    if normalized.contains(DOCK_KEYWORD) {
        Some(SlotType::Dock)
    } else if normalized.contains(FRONTED_KEYWORD) || normalized.contains(YARD_KEYWORD) {
        Some(SlotType::Yard)
    } else {
        None
    }
}

/// Last run of ASCII digits in the label
fn trailing_number(normalized: &str) -> Option<usize> {
    let end = normalized.rfind(|c: char| c.is_ascii_digit())? + 1;
    let start = normalized[..end]
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    normalized[start..end].parse().ok()
}

/// Status from the sheet cell, else inferred from seals and economic number
pub fn resolve_status(row: &SheetRow, slot_type: SlotType) -> Status {
    let raw = row.status_text();
    let cleaned = raw.strip_suffix('.').unwrap_or(raw).trim();

    if let Some(status) = Status::from_label(&capitalize(cleaned)) {
        if slot_type.allows(status) {
            return status;
        }
    }

    if !row.seal_1().is_empty() || !row.seal_2().is_empty() {
        return Status::Loaded;
    }
    if !row.economic_number().is_empty() && slot_type.allows(Status::Loaded) {
        return Status::Loaded;
    }
    Status::Empty
}

/// "cARGADA" -> "Cargada"
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
