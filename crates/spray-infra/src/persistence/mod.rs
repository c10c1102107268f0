//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_favorites_repo;
mod file_history_repo;
mod json_file;

pub use file_favorites_repo::FileFavoritesRepository;
pub use file_history_repo::FileHistoryRepository;
