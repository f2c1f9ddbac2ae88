//! Application service layer - inventory store, config, import/export use cases

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
pub mod store;
pub mod theme;
