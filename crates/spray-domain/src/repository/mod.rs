//! Repository trait definitions for history and favorites persistence

mod memory;

pub use memory::{InMemoryFavoritesRepository, InMemoryHistoryRepository};

use spray_types::Error;
use uuid::Uuid;

use crate::model::{FavoriteConfiguration, SprayCalculation};

/// Most recent calculations kept in history
pub const HISTORY_LIMIT: usize = 50;

/// Repository for past calculations, most recent first
pub trait CalculationHistoryRepository {
    /// Record a calculation at the front, evicting the oldest beyond
    /// [`HISTORY_LIMIT`]
    fn append(&self, calculation: &SprayCalculation) -> Result<(), Error>;

    /// All calculations, most recent first
    fn list(&self) -> Result<Vec<SprayCalculation>, Error>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<SprayCalculation>, Error>;

    /// Returns false when no calculation had this id
    fn delete_by_id(&self, id: Uuid) -> Result<bool, Error>;

    fn clear(&self) -> Result<(), Error>;
}

/// Repository for saved configurations, most recent first
pub trait FavoritesRepository {
    fn add(&self, favorite: &FavoriteConfiguration) -> Result<(), Error>;

    fn list(&self) -> Result<Vec<FavoriteConfiguration>, Error>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<FavoriteConfiguration>, Error>;

    /// Returns false when no favorite had this id
    fn delete_by_id(&self, id: Uuid) -> Result<bool, Error>;
}

/// Insert at the front of a history list, replacing an entry with the same
/// id and trimming to [`HISTORY_LIMIT`]
pub fn push_bounded(entries: &mut Vec<SprayCalculation>, calculation: &SprayCalculation) {
    entries.retain(|c| c.id() != calculation.id());
    entries.insert(0, calculation.clone());
    entries.truncate(HISTORY_LIMIT);
}

/// Insert at the front of a favorites list, replacing an entry with the same id
pub fn push_favorite(entries: &mut Vec<FavoriteConfiguration>, favorite: &FavoriteConfiguration) {
    entries.retain(|f| f.id != favorite.id);
    entries.insert(0, favorite.clone());
}
