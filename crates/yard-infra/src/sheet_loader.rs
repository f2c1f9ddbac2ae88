//! Spreadsheet loaders for inventory import
//!
//! Excel/ODS workbooks go through calamine; CSV files are read as a single
//! sheet named after the file. Every row is cut to the 8 positional columns
//! A..H, with cell text trimmed and missing cells left empty.

use std::borrow::Cow;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use yard_domain::model::sheet::COLUMN_COUNT;
use yard_domain::model::{Sheet, SheetRow, Workbook};
use yard_types::{Error, Result};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load every sheet of an import file
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if extension == "csv" {
        load_csv(path)
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        load_spreadsheet(path)
    } else {
        Err(Error::FileParse(format!(
            "unsupported file type: {}",
            path.display()
        )))
    }
}

fn load_spreadsheet(path: &Path) -> Result<Workbook> {
    let mut workbook = open_workbook_auto(path).map_err(|e| Error::FileParse(e.to_string()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| Error::FileParse(format!("sheet '{}': {}", name, e)))?;
        let rows = range_rows(&range);
        debug!(sheet = %name, rows = rows.len(), "sheet loaded");
        sheets.push(Sheet { name, rows });
    }

    Ok(Workbook { sheets })
}

/// Rows of a used range, re-anchored at column A
fn range_rows(range: &Range<Data>) -> Vec<SheetRow> {
    // calamine ranges start at the first used cell, not at A1
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);

    range
        .rows()
        .map(|cells| {
            SheetRow::new((0..COLUMN_COUNT).map(|col| {
                col.checked_sub(col_offset)
                    .and_then(|i| cells.get(i))
                    .map(cell_text)
                    .unwrap_or_default()
            }))
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        // Whole numbers typed into Excel come back as floats: 53.0 -> "53"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn load_csv(path: &Path) -> Result<Workbook> {
    let bytes = std::fs::read(path)?;
    let text = decode_text(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::FileParse(e.to_string()))?;
        rows.push(SheetRow::new(record.iter()));
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "CSV".to_string());
    debug!(sheet = %name, rows = rows.len(), "csv loaded");

    Ok(Workbook {
        sheets: vec![Sheet { name, rows }],
    })
}

/// UTF-8 (BOM stripped), falling back to Windows-1252 as saved by Excel
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }
    let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
    if had_errors {
        warn!("Some characters could not be decoded from Windows-1252");
    }
    text
}
