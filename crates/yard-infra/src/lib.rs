//! Infrastructure layer: on-disk key/value storage and spreadsheet loaders

pub mod persistence;
pub mod sheet_loader;
