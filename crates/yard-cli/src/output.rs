//! Output formatting module

use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use yard_app::app::ImportReport;
use yard_domain::model::{Shift, ShiftInventory, Slot, SlotType, Status, Theme};
use yard_types::{OutputFormat, Result};

/// Board glyphs. Every icon has a glyph; there is no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Truck,
    Box,
    CheckCircle,
    AlertTriangle,
    Sun,
    Moon,
    FileSpreadsheet,
    Eraser,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Truck,
        Icon::Box,
        Icon::CheckCircle,
        Icon::AlertTriangle,
        Icon::Sun,
        Icon::Moon,
        Icon::FileSpreadsheet,
        Icon::Eraser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Truck => "truck",
            Icon::Box => "box",
            Icon::CheckCircle => "check-circle",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
            Icon::FileSpreadsheet => "file-spreadsheet",
            Icon::Eraser => "eraser",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Truck => "🚛",
            Icon::Box => "📦",
            Icon::CheckCircle => "✅",
            Icon::AlertTriangle => "⚠️",
            Icon::Sun => "☀️",
            Icon::Moon => "🌙",
            Icon::FileSpreadsheet => "📊",
            Icon::Eraser => "🧹",
        }
    }

    /// Truck when something is parked, box when free
    pub fn for_slot(slot: &Slot) -> Icon {
        if slot.is_occupied() {
            Icon::Truck
        } else {
            Icon::Box
        }
    }

    /// Seal marker for fronted/loaded slots: is seal #2 recorded?
    pub fn seal_marker(slot: &Slot) -> Option<Icon> {
        if !slot.status.requires_seal() {
            return None;
        }
        if slot.seal_right.trim().is_empty() {
            Some(Icon::AlertTriangle)
        } else {
            Some(Icon::CheckCircle)
        }
    }

    pub fn for_theme(theme: Theme) -> Icon {
        match theme {
            Theme::Light => Icon::Sun,
            Theme::Dark => Icon::Moon,
        }
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .ok_or_else(|| format!("unknown icon '{}'", name))
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// ANSI colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    loaded: &'static str,
    fronted: &'static str,
    ramped: &'static str,
    parked: &'static str,
    empty: &'static str,
    heading: &'static str,
}

const RESET: &str = "\x1b[0m";

impl Palette {
    pub fn for_theme(theme: Theme, enabled: bool) -> Self {
        match theme {
            Theme::Light => Self {
                enabled,
                loaded: "\x1b[31m",
                fronted: "\x1b[33m",
                ramped: "\x1b[34m",
                parked: "\x1b[32m",
                empty: "\x1b[2m",
                heading: "\x1b[1;30m",
            },
            Theme::Dark => Self {
                enabled,
                loaded: "\x1b[91m",
                fronted: "\x1b[93m",
                ramped: "\x1b[96m",
                parked: "\x1b[92m",
                empty: "\x1b[90m",
                heading: "\x1b[1;97m",
            },
        }
    }

    /// Colors only on a terminal, and never when NO_COLOR is set
    pub fn detect(theme: Theme) -> Self {
        let enabled = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::for_theme(theme, enabled)
    }

    fn slot_color(&self, slot: &Slot) -> &'static str {
        match slot.status {
            Status::Loaded => self.loaded,
            Status::Fronted => self.fronted,
            Status::Ramped => self.ramped,
            Status::Empty if slot.has_unit_data() => self.parked,
            Status::Empty => self.empty,
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Dark terminal background according to COLORFGBG ("fg;bg", bg 0-6 or 8 is dark)
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .map(|value| colorfgbg_is_dark(&value))
        .unwrap_or(false)
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg < 7 || bg == 8)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// "ECO 1044", "Sin económico" or "Disponible"
fn unit_text(slot: &Slot) -> String {
    if !slot.economic_number.is_empty() {
        format!("ECO {}", slot.economic_number)
    } else if slot.is_occupied() {
        "Sin económico".to_string()
    } else {
        "Disponible".to_string()
    }
}

pub fn board_line(slot: &Slot, palette: &Palette) -> String {
    let marker = Icon::seal_marker(slot).map_or(String::new(), |icon| format!(" {}", icon));
    let line = format!(
        "{:>3} {} {:<10} {:<16} {}{}",
        slot.number,
        Icon::for_slot(slot),
        slot.status.label().to_uppercase(),
        unit_text(slot),
        slot.carrier_line,
        marker
    );
    palette.paint(palette.slot_color(slot), line.trim_end())
}

pub fn output_board(
    output_format: OutputFormat,
    shift: Shift,
    shift_inventory: &ShiftInventory,
    only: Option<SlotType>,
    theme: Theme,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return match only {
            Some(slot_type) => print_json(shift_inventory.slots(slot_type)),
            None => print_json(shift_inventory),
        };
    }

    let palette = Palette::detect(theme);
    println!(
        "\n{}",
        palette.paint(palette.heading, &format!("Turno {}", shift))
    );

    let types: &[SlotType] = match &only {
        Some(slot_type) => std::slice::from_ref(slot_type),
        None => &SlotType::ALL,
    };
    for &slot_type in types {
        let (occupied, total) = shift_inventory.occupancy(slot_type);
        let title = match slot_type {
            SlotType::Dock => "Andenes",
            SlotType::Yard => "Patio",
        };
        println!("\n{} ({}/{})", title, occupied, total);
        println!("{}", "=".repeat(40));
        for slot in shift_inventory.slots(slot_type) {
            println!("{}", board_line(slot, &palette));
        }
    }

    Ok(())
}

pub fn output_slot(output_format: OutputFormat, slot: &Slot) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(slot);
    }

    let dash = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    println!("\n{} {} ({})", Icon::for_slot(slot), slot.location(), slot.id);
    println!("===============");
    println!("Status:          {}", slot.status);
    println!("FT:              {}", dash(&slot.size));
    println!("Eco.:            {}", dash(&slot.economic_number));
    println!("Línea:           {}", dash(&slot.carrier_line));
    println!("Sello #1:        {}", dash(&slot.seal_left));
    println!("Sello #2:        {}", dash(&slot.seal_right));
    println!("Observaciones:   {}", dash(&slot.observations));
    if let Some(updated_at) = slot.updated_at {
        println!("Updated:         {}", updated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}

/// Summary lines printed after an import
fn import_lines(report: &ImportReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} Importado en Turno {} (hoja '{}')",
            Icon::FileSpreadsheet,
            report.shift,
            report.sheet
        ),
        format!("Andenes: {}", report.summary.docks),
        format!("Patio: {}", report.summary.yard),
    ];
    let skipped = report.rows.saturating_sub(report.summary.total());
    if skipped > 0 {
        lines.push(format!("({} filas omitidas)", skipped));
    }
    lines
}

pub fn output_import(output_format: OutputFormat, report: &ImportReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    for line in import_lines(report) {
        println!("{}", line);
    }
    Ok(())
}

pub fn output_export(output_format: OutputFormat, path: &Path) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({ "path": path }));
    }
    println!("{} Exported to: {}", Icon::FileSpreadsheet, path.display());
    Ok(())
}

pub fn output_cleaned(output_format: OutputFormat, what: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({ "cleaned": what }));
    }
    println!("{} Limpieza Completada: {}", Icon::Eraser, what);
    Ok(())
}

pub fn output_theme(output_format: OutputFormat, theme: Theme) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({ "theme": theme }));
    }
    println!("{} {}", Icon::for_theme(theme), theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_domain::service::ImportSummary;

    fn slot(status: Status) -> Slot {
        let mut slot = Slot::at(Shift::First, SlotType::Dock, 4);
        slot.status = status;
        slot
    }

    #[test]
    fn test_icon_names_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_unknown_icon_is_an_error() {
        let err = "rocket".parse::<Icon>().unwrap_err();
        assert!(err.contains("rocket"));
    }

    #[test]
    fn test_slot_icons() {
        assert_eq!(Icon::for_slot(&slot(Status::Empty)), Icon::Box);
        assert_eq!(Icon::for_slot(&slot(Status::Ramped)), Icon::Truck);
        assert_eq!(Icon::seal_marker(&slot(Status::Ramped)), None);
        assert_eq!(
            Icon::seal_marker(&slot(Status::Loaded)),
            Some(Icon::AlertTriangle)
        );

        let mut sealed = slot(Status::Fronted);
        sealed.seal_right = "R-9".to_string();
        assert_eq!(Icon::seal_marker(&sealed), Some(Icon::CheckCircle));
    }

    #[test]
    fn test_unit_text() {
        assert_eq!(unit_text(&slot(Status::Empty)), "Disponible");
        assert_eq!(unit_text(&slot(Status::Loaded)), "Sin económico");
        let mut with_eco = slot(Status::Loaded);
        with_eco.economic_number = "1044".to_string();
        assert_eq!(unit_text(&with_eco), "ECO 1044");
    }

    #[test]
    fn test_palette_depends_on_theme() {
        let light = Palette::for_theme(Theme::Light, true);
        let dark = Palette::for_theme(Theme::Dark, true);
        let loaded = slot(Status::Loaded);
        assert_ne!(light.slot_color(&loaded), dark.slot_color(&loaded));

        let mut parked = slot(Status::Empty);
        parked.carrier_line = "Castores".to_string();
        assert_eq!(light.slot_color(&parked), light.parked);
        assert_eq!(light.slot_color(&slot(Status::Empty)), light.empty);
    }

    #[test]
    fn test_board_line_without_color() {
        let palette = Palette::for_theme(Theme::Dark, false);
        let mut loaded = slot(Status::Loaded);
        loaded.economic_number = "77".to_string();
        loaded.carrier_line = "TUM".to_string();
        let line = board_line(&loaded, &palette);
        assert!(line.contains("CARGADA"));
        assert!(line.contains("ECO 77"));
        assert!(line.contains("TUM"));
        assert!(line.ends_with(Icon::AlertTriangle.glyph()));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_colorfgbg() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;8"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("garbage"));
    }

    #[test]
    fn test_import_lines_are_spanish() {
        let mut report = ImportReport {
            sheet: "Turno 1".to_string(),
            shift: 1,
            rows: 5,
            summary: ImportSummary { docks: 2, yard: 1 },
        };
        let lines = import_lines(&report);
        assert!(lines[0].ends_with("Importado en Turno 1 (hoja 'Turno 1')"));
        assert_eq!(lines[1], "Andenes: 2");
        assert_eq!(lines[2], "Patio: 1");
        assert_eq!(lines[3], "(2 filas omitidas)");

        report.rows = 3;
        assert_eq!(import_lines(&report).len(), 3);
    }
}
