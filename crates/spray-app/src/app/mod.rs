//! Use cases: calculating, recording, and reusing spray parameters

pub mod calculation_service;
pub mod favorites_service;

pub use calculation_service::{calculate, calculate_and_record, find_calculation};
pub use favorites_service::{
    apply_favorite, favorite_from_text, find_favorite, save_favorite,
};
