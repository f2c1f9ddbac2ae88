//! Import Service - spreadsheet file into one shift
//!
//! 1. Read the file into sheets (any parse failure aborts, nothing changes)
//! 2. Pick the sheet: implicit for single-sheet files, named otherwise
//! 3. Reconcile the rows into the shift through the store

use serde::Serialize;
use std::path::Path;

use yard_domain::model::Shift;
use yard_domain::repository::InventoryRepository;
use yard_domain::service::ImportSummary;
use yard_infra::sheet_loader::load_workbook;
use yard_types::Result;

use crate::store::InventoryStore;

/// What an import did, for user feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub sheet: String,
    pub shift: u8,
    pub rows: usize,
    pub summary: ImportSummary,
}

pub fn import_file<R: InventoryRepository>(
    store: &mut InventoryStore<R>,
    shift: Shift,
    path: &Path,
    sheet_name: Option<&str>,
) -> Result<ImportReport> {
    let workbook = load_workbook(path)?;
    let sheet = workbook.select(sheet_name)?;

    let summary = store.import_sheet(shift, &sheet.rows);

    Ok(ImportReport {
        sheet: sheet.name.clone(),
        shift: shift.number(),
        rows: sheet.rows.len(),
        summary,
    })
}
