//! Export Service - current shift to an .xlsx file

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

use yard_domain::model::Shift;
use yard_domain::repository::InventoryRepository;
use yard_types::Result;

use crate::config::Config;
use crate::export::{default_export_file_name, export_shift_to_excel};
use crate::store::InventoryStore;

/// Explicit output path, else a dated file name in the export directory
pub fn resolve_export_path(config: &Config, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => config.export_dir().join(default_export_file_name(
            &config.report_title,
            Local::now().date_naive(),
        )),
    }
}

/// Write `shift` to disk and return the file path
pub fn export_shift<R: InventoryRepository>(
    store: &InventoryStore<R>,
    config: &Config,
    shift: Shift,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = resolve_export_path(config, output);
    export_shift_to_excel(store.shift(shift), &config.report_title, &path)?;
    info!(shift = %shift, path = %path.display(), "shift exported");
    Ok(path)
}
