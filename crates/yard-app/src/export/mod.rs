//! Export functionality

mod excel;

pub use excel::{default_export_file_name, export_shift_to_excel, SHEET_NAME};
