//! Repository adapters for persistence layer

use std::path::PathBuf;

use spray_infra::persistence::{FileFavoritesRepository, FileHistoryRepository};
use spray_types::Result;

use crate::config::Config;

/// Open file-based calculation history repository
pub fn open_history_repo(config: &Config) -> Result<FileHistoryRepository> {
    let store_dir = config.store_dir()?;
    FileHistoryRepository::open(store_dir)
}

/// Open file-based favorites repository
pub fn open_favorites_repo(config: &Config) -> Result<FileFavoritesRepository> {
    let store_dir = config.store_dir()?;
    FileFavoritesRepository::open(store_dir)
}

/// Open calculation history at a custom directory
pub fn open_history_repo_at(store_dir: PathBuf) -> Result<FileHistoryRepository> {
    FileHistoryRepository::open(store_dir)
}

/// Open favorites at a custom directory
pub fn open_favorites_repo_at(store_dir: PathBuf) -> Result<FileFavoritesRepository> {
    FileFavoritesRepository::open(store_dir)
}
