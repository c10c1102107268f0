//! File-based calculation history repository

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use spray_domain::model::SprayCalculation;
use spray_domain::repository::{push_bounded, CalculationHistoryRepository, HISTORY_LIMIT};
use spray_types::{Error, Result};
use tracing::info;
use uuid::Uuid;

use super::json_file::{load_records, save_records};

const HISTORY_FILE: &str = "history.json";

/// File-based implementation of CalculationHistoryRepository
///
/// Stores the history list, most recent first, in a JSON file on disk.
/// Every mutation is written through immediately.
pub struct FileHistoryRepository {
    store_path: PathBuf,
    entries: RefCell<Vec<SprayCalculation>>,
}

impl FileHistoryRepository {
    /// Create or load a history repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(HISTORY_FILE);

        let mut entries: Vec<SprayCalculation> = load_records(&store_path)?;
        // A file written by hand or by an older build may exceed the cap
        entries.truncate(HISTORY_LIMIT);

        Ok(Self {
            store_path,
            entries: RefCell::new(entries),
        })
    }

    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Most recent calculation, if any
    pub fn latest(&self) -> Option<SprayCalculation> {
        self.entries.borrow().first().cloned()
    }

    fn persist(&self) -> Result<()> {
        save_records(&self.store_path, &self.entries.borrow())
    }
}

impl CalculationHistoryRepository for FileHistoryRepository {
    fn append(&self, calculation: &SprayCalculation) -> std::result::Result<(), Error> {
        push_bounded(&mut self.entries.borrow_mut(), calculation);
        self.persist()?;
        info!(id = %calculation.id(), total = self.count(), "calculation added to history");
        Ok(())
    }

    fn list(&self) -> std::result::Result<Vec<SprayCalculation>, Error> {
        Ok(self.entries.borrow().clone())
    }

    fn find_by_id(&self, id: Uuid) -> std::result::Result<Option<SprayCalculation>, Error> {
        Ok(self.entries.borrow().iter().find(|c| c.id() == id).cloned())
    }

    fn delete_by_id(&self, id: Uuid) -> std::result::Result<bool, Error> {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|c| c.id() != id);
            entries.len() != before
        };
        if removed {
            self.persist()?;
            info!(%id, "calculation deleted from history");
        }
        Ok(removed)
    }

    fn clear(&self) -> std::result::Result<(), Error> {
        self.entries.borrow_mut().clear();
        self.persist()?;
        info!("history cleared");
        Ok(())
    }
}
