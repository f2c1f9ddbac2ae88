//! Use cases that combine the store with file I/O

pub mod export_service;
pub mod import_service;

pub use export_service::{export_shift, resolve_export_path};
pub use import_service::{import_file, ImportReport};
