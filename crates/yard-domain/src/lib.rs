//! Domain layer for the yard inventory: slot models, pure services and
//! repository traits.

pub mod model;
pub mod repository;
pub mod service;
