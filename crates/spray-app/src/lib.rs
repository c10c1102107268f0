//! Application service layer - use cases, config, labels, export

pub mod app;
pub mod config;
pub mod export;
pub mod labels;
pub mod repository;
