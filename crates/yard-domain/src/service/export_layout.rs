//! Row layout of the shift export sheet
//!
//! Three stacked sections: every dock (fronted ones blanked), every dock
//! again under a "Frenteada" separator (only fronted ones filled in), then
//! the yard. Fronted trailers end up grouped on paper while the dock
//! numbering stays intact.

use crate::model::{ShiftInventory, Slot, Status};

/// Header row, columns A..H
pub const HEADERS: [&str; 8] = [
    "Ubicación",
    "FT",
    "Eco.",
    "Línea",
    "Sello #1",
    "Sello #2",
    "Status",
    "Observaciones",
];

const FRONTED_SECTION: &str = "Frenteada";
const YARD_SECTION: &str = "Patio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRow {
    /// Location plus the seven data columns
    Slot([String; 8]),
    /// Section title, written in column B
    Separator(&'static str),
}

impl ExportRow {
    pub fn cells(&self) -> [&str; 8] {
        match self {
            ExportRow::Slot(cells) => cells.each_ref().map(String::as_str),
            ExportRow::Separator(title) => ["", *title, "", "", "", "", "", ""],
        }
    }
}

pub fn layout_shift(shift: &ShiftInventory) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(shift.docks.len() * 2 + shift.yard.len() + 2);

    for slot in &shift.docks {
        let location = format!("Andén {}", slot.number);
        rows.push(slot_row(location, slot, slot.status != Status::Fronted));
    }

    rows.push(ExportRow::Separator(FRONTED_SECTION));
    for slot in &shift.docks {
        let location = format!("Frenteada {}", slot.number);
        rows.push(slot_row(location, slot, slot.status == Status::Fronted));
    }

    rows.push(ExportRow::Separator(YARD_SECTION));
    for slot in &shift.yard {
        let location = format!("Patio {}", slot.number);
        rows.push(slot_row(location, slot, true));
    }

    rows
}

fn slot_row(location: String, slot: &Slot, show: bool) -> ExportRow {
    if !show {
        return ExportRow::Slot([
            location,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]);
    }
    ExportRow::Slot([
        location,
        slot.size.clone(),
        slot.economic_number.clone(),
        slot.carrier_line.clone(),
        slot.seal_left.clone(),
        slot.seal_right.clone(),
        status_cell(slot.status),
        slot.observations.clone(),
    ])
}

/// "Cargada." for occupied slots, blank when empty
fn status_cell(status: Status) -> String {
    match status {
        Status::Empty => String::new(),
        other => format!("{}.", other.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shift;
    use crate::service::generate_shift;

    fn filled(shift: &mut ShiftInventory, index: usize, status: Status) {
        let slot = &mut shift.docks[index];
        slot.size = "53".to_string();
        slot.economic_number = format!("E{}", index + 1);
        slot.carrier_line = "Tresguerras".to_string();
        slot.seal_left = "L1".to_string();
        slot.seal_right = "R1".to_string();
        slot.observations = "ok".to_string();
        slot.status = status;
    }

    #[test]
    fn test_section_layout() {
        let rows = layout_shift(&generate_shift(Shift::First));
        assert_eq!(rows.len(), 18 + 1 + 18 + 1 + 20);
        assert_eq!(rows[0].cells()[0], "Andén 1");
        assert_eq!(rows[17].cells()[0], "Andén 18");
        assert_eq!(rows[18], ExportRow::Separator("Frenteada"));
        assert_eq!(rows[19].cells()[0], "Frenteada 1");
        assert_eq!(rows[36].cells()[0], "Frenteada 18");
        assert_eq!(rows[37], ExportRow::Separator("Patio"));
        assert_eq!(rows[38].cells()[0], "Patio 1");
        assert_eq!(rows[57].cells()[0], "Patio 20");
    }

    #[test]
    fn test_fronted_dock_moves_to_fronted_section() {
        let mut shift = generate_shift(Shift::First);
        filled(&mut shift, 2, Status::Fronted);
        let rows = layout_shift(&shift);

        let dock_row = rows[2].cells();
        assert_eq!(dock_row[0], "Andén 3");
        assert!(dock_row[1..].iter().all(|c| c.is_empty()));

        let fronted_row = rows[19 + 2].cells();
        assert_eq!(
            fronted_row,
            ["Frenteada 3", "53", "E3", "Tresguerras", "L1", "R1", "Frenteada.", "ok"]
        );
    }

    #[test]
    fn test_other_dock_stays_in_dock_section() {
        let mut shift = generate_shift(Shift::First);
        filled(&mut shift, 0, Status::Loaded);
        let rows = layout_shift(&shift);

        assert_eq!(
            rows[0].cells(),
            ["Andén 1", "53", "E1", "Tresguerras", "L1", "R1", "Cargada.", "ok"]
        );
        let fronted_row = rows[19].cells();
        assert_eq!(fronted_row[0], "Frenteada 1");
        assert!(fronted_row[1..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_empty_status_renders_blank() {
        let mut shift = generate_shift(Shift::First);
        shift.yard[0].economic_number = "E-1".to_string();
        let rows = layout_shift(&shift);
        let yard_row = rows[38].cells();
        assert_eq!(yard_row[2], "E-1");
        assert_eq!(yard_row[6], "");
    }

    #[test]
    fn test_separator_cells() {
        assert_eq!(
            ExportRow::Separator("Patio").cells(),
            ["", "Patio", "", "", "", "", "", ""]
        );
    }
}
