//! In-memory repository implementations
//!
//! Used by tests and by callers that do not want anything written to disk.

use std::cell::RefCell;

use spray_types::Error;
use uuid::Uuid;

use super::{push_bounded, push_favorite, CalculationHistoryRepository, FavoritesRepository};
use crate::model::{FavoriteConfiguration, SprayCalculation};

#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    entries: RefCell<Vec<SprayCalculation>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CalculationHistoryRepository for InMemoryHistoryRepository {
    fn append(&self, calculation: &SprayCalculation) -> Result<(), Error> {
        push_bounded(&mut self.entries.borrow_mut(), calculation);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SprayCalculation>, Error> {
        Ok(self.entries.borrow().clone())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<SprayCalculation>, Error> {
        Ok(self.entries.borrow().iter().find(|c| c.id() == id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool, Error> {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|c| c.id() != id);
        Ok(entries.len() != before)
    }

    fn clear(&self) -> Result<(), Error> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFavoritesRepository {
    favorites: RefCell<Vec<FavoriteConfiguration>>,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesRepository for InMemoryFavoritesRepository {
    fn add(&self, favorite: &FavoriteConfiguration) -> Result<(), Error> {
        push_favorite(&mut self.favorites.borrow_mut(), favorite);
        Ok(())
    }

    fn list(&self) -> Result<Vec<FavoriteConfiguration>, Error> {
        Ok(self.favorites.borrow().clone())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<FavoriteConfiguration>, Error> {
        Ok(self.favorites.borrow().iter().find(|f| f.id == id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool, Error> {
        let mut favorites = self.favorites.borrow_mut();
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        Ok(favorites.len() != before)
    }
}
