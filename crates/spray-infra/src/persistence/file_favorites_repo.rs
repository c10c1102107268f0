//! File-based favorites repository

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use spray_domain::model::FavoriteConfiguration;
use spray_domain::repository::{push_favorite, FavoritesRepository};
use spray_types::{Error, Result};
use tracing::info;
use uuid::Uuid;

use super::json_file::{load_records, save_records};

const FAVORITES_FILE: &str = "favorites.json";

/// File-based implementation of FavoritesRepository
pub struct FileFavoritesRepository {
    store_path: PathBuf,
    favorites: RefCell<Vec<FavoriteConfiguration>>,
}

impl FileFavoritesRepository {
    /// Create or load a favorites repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(FAVORITES_FILE);
        let favorites = load_records(&store_path)?;

        Ok(Self {
            store_path,
            favorites: RefCell::new(favorites),
        })
    }

    pub fn count(&self) -> usize {
        self.favorites.borrow().len()
    }

    /// Look a favorite up by exact name (first match, most recent first)
    pub fn find_by_name(&self, name: &str) -> Option<FavoriteConfiguration> {
        self.favorites
            .borrow()
            .iter()
            .find(|f| f.name == name)
            .cloned()
    }

    fn persist(&self) -> Result<()> {
        save_records(&self.store_path, &self.favorites.borrow())
    }
}

impl FavoritesRepository for FileFavoritesRepository {
    fn add(&self, favorite: &FavoriteConfiguration) -> std::result::Result<(), Error> {
        push_favorite(&mut self.favorites.borrow_mut(), favorite);
        self.persist()?;
        info!(id = %favorite.id, name = %favorite.name, "favorite saved");
        Ok(())
    }

    fn list(&self) -> std::result::Result<Vec<FavoriteConfiguration>, Error> {
        Ok(self.favorites.borrow().clone())
    }

    fn find_by_id(&self, id: Uuid) -> std::result::Result<Option<FavoriteConfiguration>, Error> {
        Ok(self.favorites.borrow().iter().find(|f| f.id == id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> std::result::Result<bool, Error> {
        let removed = {
            let mut favorites = self.favorites.borrow_mut();
            let before = favorites.len();
            favorites.retain(|f| f.id != id);
            favorites.len() != before
        };
        if removed {
            self.persist()?;
            info!(%id, "favorite deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spray_domain::model::AreaUnit;
    use tempfile::tempdir;

    #[test]
    fn test_favorites_survive_reopen_in_order() {
        let dir = tempdir().unwrap();
        let older = FavoriteConfiguration::new("Rzepak", 200.0, 2.0, 1000.0, AreaUnit::Hectares);
        let newer = FavoriteConfiguration::new("Buraki", 300.0, 3.5, 2500.0, AreaUnit::Ares);
        {
            let repo = FileFavoritesRepository::open(dir.path().to_path_buf()).unwrap();
            repo.add(&older).unwrap();
            repo.add(&newer).unwrap();
        }

        let repo = FileFavoritesRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(repo.list().unwrap(), vec![newer.clone(), older.clone()]);
        assert_eq!(repo.find_by_name("Rzepak"), Some(older));
        assert_eq!(repo.find_by_id(newer.id).unwrap(), Some(newer));
    }

    #[test]
    fn test_delete_only_named_favorite() {
        let dir = tempdir().unwrap();
        let repo = FileFavoritesRepository::open(dir.path().to_path_buf()).unwrap();
        let a = FavoriteConfiguration::new("A", 100.0, 1.0, 600.0, AreaUnit::Hectares);
        let b = FavoriteConfiguration::new("B", 150.0, 1.0, 600.0, AreaUnit::Hectares);
        repo.add(&a).unwrap();
        repo.add(&b).unwrap();

        assert!(repo.delete_by_id(a.id).unwrap());
        assert!(!repo.delete_by_id(a.id).unwrap());

        let reopened = FileFavoritesRepository::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.count(), 1);
        assert_eq!(reopened.list().unwrap()[0].id, b.id);
    }
}
