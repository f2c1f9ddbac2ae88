//! Domain services

pub mod export_layout;
pub mod import_reconciler;
pub mod initial_data;
pub mod validation;

pub use export_layout::{layout_shift, ExportRow, HEADERS};
pub use import_reconciler::{reconcile, ImportSummary, ReconcileOutcome};
pub use initial_data::{generate_initial, generate_shift};
pub use validation::validate_draft;
