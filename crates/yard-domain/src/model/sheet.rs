//! Parsed spreadsheet contents, independent of the file format

use yard_types::{Error, Result};

/// Positional columns A..H of an inventory sheet
pub const COLUMN_COUNT: usize = 8;

const LOCATION: usize = 0;
const SIZE: usize = 1;
const ECONOMIC_NUMBER: usize = 2;
const CARRIER_LINE: usize = 3;
const SEAL_1: usize = 4;
const SEAL_2: usize = 5;
const STATUS: usize = 6;
const OBSERVATIONS: usize = 7;

/// One sheet row; missing cells are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: [String; COLUMN_COUNT],
}

impl SheetRow {
    /// Build a row from the leading cells; extra cells are ignored
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::default();
        for (slot, value) in row.cells.iter_mut().zip(cells) {
            *slot = value.into();
        }
        row
    }

    pub fn cells(&self) -> &[String; COLUMN_COUNT] {
        &self.cells
    }

    pub fn location(&self) -> &str {
        &self.cells[LOCATION]
    }

    pub fn size(&self) -> &str {
        &self.cells[SIZE]
    }

    pub fn economic_number(&self) -> &str {
        &self.cells[ECONOMIC_NUMBER]
    }

    pub fn carrier_line(&self) -> &str {
        &self.cells[CARRIER_LINE]
    }

    pub fn seal_1(&self) -> &str {
        &self.cells[SEAL_1]
    }

    pub fn seal_2(&self) -> &str {
        &self.cells[SEAL_2]
    }

    pub fn status_text(&self) -> &str {
        &self.cells[STATUS]
    }

    pub fn observations(&self) -> &str {
        &self.cells[OBSERVATIONS]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// Pick the sheet to import.
    ///
    /// A single-sheet workbook needs no selection; with several sheets the
    /// caller must name one.
    pub fn select(&self, name: Option<&str>) -> Result<&Sheet> {
        match name {
            Some(name) => self
                .sheets
                .iter()
                .find(|s| s.name == name)
                .ok_or_else(|| Error::SheetNotFound(name.to_string())),
            None => match self.sheets.as_slice() {
                [] => Err(Error::FileParse("workbook contains no sheets".to_string())),
                [only] => Ok(only),
                _ => Err(Error::SheetSelectionRequired(self.sheet_names())),
            },
        }
    }
}
