//! Excel export of one shift

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

use yard_domain::model::ShiftInventory;
use yard_domain::service::{layout_shift, ExportRow, HEADERS};
use yard_types::{Error, Result};

pub const SHEET_NAME: &str = "Inventario";

const COLUMN_WIDTHS: [f64; 8] = [15.0, 6.0, 12.0, 15.0, 12.0, 12.0, 15.0, 30.0];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// "Inventario Nexxus - 17 de octubre.xlsx"
pub fn default_export_file_name(title: &str, date: NaiveDate) -> String {
    format!(
        "{} - {} de {}.xlsx",
        title,
        date.day(),
        MONTHS_ES[date.month0() as usize]
    )
}

/// Write the shift to a single-sheet workbook
pub fn export_shift_to_excel(shift: &ShiftInventory, title: &str, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_inventory_sheet(sheet, shift, title).map_err(|e| Error::Excel(e.to_string()))?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_inventory_sheet(
    sheet: &mut Worksheet,
    shift: &ShiftInventory,
    title: &str,
) -> std::result::Result<(), rust_xlsxwriter::XlsxError> {
    sheet.set_name(SHEET_NAME)?;

    let title_format = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_font_name("Calibri")
        .set_align(FormatAlign::Left);
    let header_format = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_font_name("Calibri")
        .set_background_color(Color::RGB(0xE0E0E0))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let data_format = Format::new()
        .set_font_size(11)
        .set_font_name("Calibri")
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let separator_format = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_font_name("Calibri");

    sheet.write_string_with_format(0, 0, title, &title_format)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(1, col as u16, *header, &header_format)?;
    }

    for (row_idx, row) in layout_shift(shift).iter().enumerate() {
        let xl_row = (row_idx + 2) as u32;
        match row {
            ExportRow::Slot(cells) => {
                for (col, value) in cells.iter().enumerate() {
                    if value.is_empty() {
                        sheet.write_blank(xl_row, col as u16, &data_format)?;
                    } else {
                        sheet.write_string_with_format(xl_row, col as u16, value, &data_format)?;
                    }
                }
            }
            ExportRow::Separator(section) => {
                sheet.write_string_with_format(xl_row, 1, *section, &separator_format)?;
            }
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    Ok(())
}
