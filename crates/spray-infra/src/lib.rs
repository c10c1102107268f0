//! Infrastructure layer - persistence implementations and exports

pub mod history_csv;
pub mod persistence;
