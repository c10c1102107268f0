//! On-disk store format
//!
//! Stores written by hand (or by an older build) must keep loading.

use spray_domain::model::AreaUnit;
use spray_domain::repository::{CalculationHistoryRepository, FavoritesRepository};
use spray_infra::persistence::{FileFavoritesRepository, FileHistoryRepository};
use tempfile::tempdir;
use uuid::Uuid;

const HISTORY_JSON: &str = r#"[
  {
    "id": "6f1c1b0e-3f4e-4a63-9a63-5b9f3c1d2e01",
    "created_at": "2024-04-12T07:30:00Z",
    "field_area": 15.0,
    "area_unit": "ha",
    "spray_rate": 300.0,
    "chemical_rate": 3.0,
    "tank_capacity": 1000.0
  },
  {
    "id": "0b7d4c8a-1111-4b2e-8c55-77a0e6f0aa02",
    "created_at": "2024-04-11T16:05:00Z",
    "field_area": 2500.0,
    "area_unit": "m²",
    "spray_rate": 200.0,
    "chemical_rate": 1.0,
    "tank_capacity": 600.0
  }
]"#;

const FAVORITES_JSON: &str = r#"[
  {
    "id": "9a3e7f20-2222-4d1a-b0c4-0f6e5d4c3b03",
    "name": "Rzepak jesień",
    "created_at": "2024-03-01T09:00:00Z",
    "spray_rate": 250.0,
    "chemical_rate": 0.8,
    "tank_capacity": 2500.0,
    "area_unit": "ar"
  }
]"#;

#[test]
fn test_history_file_loads_with_derived_fields() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("history.json"), HISTORY_JSON).unwrap();

    let repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
    let all = repo.list().unwrap();
    assert_eq!(all.len(), 2);

    let newest = &all[0];
    assert_eq!(newest.total_working_fluid(), 4500.0);
    assert_eq!(newest.full_tanks(), 4);
    assert_eq!(newest.partial_tank_volume(), 500.0);

    let older = &all[1];
    assert_eq!(older.area_unit(), AreaUnit::SquareMeters);
    assert!((older.field_area_in_hectares() - 0.25).abs() < 1e-12);

    let id = Uuid::parse_str("0b7d4c8a-1111-4b2e-8c55-77a0e6f0aa02").unwrap();
    assert!(repo.find_by_id(id).unwrap().is_some());
}

#[test]
fn test_favorites_file_loads() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), FAVORITES_JSON).unwrap();

    let repo = FileFavoritesRepository::open(dir.path().to_path_buf()).unwrap();
    let favorite = repo.find_by_name("Rzepak jesień").unwrap();
    assert_eq!(favorite.area_unit, AreaUnit::Ares);
    assert_eq!(favorite.chemical_rate, 0.8);
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn test_unknown_unit_falls_back_to_empty_store() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("history.json"),
        HISTORY_JSON.replace("\"ha\"", "\"acre\""),
    )
    .unwrap();

    let repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(repo.count(), 0);
}
