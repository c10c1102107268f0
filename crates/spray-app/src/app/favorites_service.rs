//! Favorites use cases

use spray_domain::model::{AreaUnit, FavoriteConfiguration, SprayCalculation};
use spray_domain::repository::{CalculationHistoryRepository, FavoritesRepository};
use spray_domain::service::{format_quantity, NumberLocale, RawCalculationInput};
use spray_types::{InvalidInputError, Result, StoreError};
use uuid::Uuid;

use super::calculation_service::calculate_and_record;

/// Name used when the user leaves the name blank
fn default_name(spray_rate: f64, chemical_rate: f64, tank_capacity: f64) -> String {
    let locale = NumberLocale::ENGLISH;
    format!(
        "{} l/ha, {} l/ha, {} l",
        format_quantity(spray_rate, &locale),
        format_quantity(chemical_rate, &locale),
        format_quantity(tank_capacity, &locale)
    )
}

/// Keep the parameters of a calculation as a named favorite
pub fn save_favorite(
    name: &str,
    calculation: &SprayCalculation,
    favorites: &dyn FavoritesRepository,
) -> Result<FavoriteConfiguration> {
    let name = match name.trim() {
        "" => default_name(
            calculation.spray_rate(),
            calculation.chemical_rate(),
            calculation.tank_capacity(),
        ),
        trimmed => trimmed.to_string(),
    };
    let favorite = FavoriteConfiguration::from_calculation(name, calculation);
    favorites.add(&favorite)?;
    Ok(favorite)
}

/// Build a favorite from typed rate and capacity fields
///
/// The same range rules as a calculation apply; the area is not asked for.
pub fn favorite_from_text(
    name: &str,
    area_unit: AreaUnit,
    spray_rate: &str,
    chemical_rate: &str,
    tank_capacity: &str,
) -> std::result::Result<FavoriteConfiguration, InvalidInputError> {
    let input = RawCalculationInput::new("0", area_unit, spray_rate, chemical_rate, tank_capacity)
        .validate()?;
    let name = match name.trim() {
        "" => default_name(input.spray_rate, input.chemical_rate, input.tank_capacity),
        trimmed => trimmed.to_string(),
    };
    Ok(FavoriteConfiguration::new(
        name,
        input.spray_rate,
        input.chemical_rate,
        input.tank_capacity,
        input.area_unit,
    ))
}

/// Calculate a field with a favorite's parameters and record it
pub fn apply_favorite(
    favorite: &FavoriteConfiguration,
    field_area: &str,
    history: &dyn CalculationHistoryRepository,
) -> Result<SprayCalculation> {
    let raw = RawCalculationInput::from_favorite(favorite, field_area);
    calculate_and_record(&raw, history)
}

/// Resolve a favorite by full id, unique id prefix, or exact name
pub fn find_favorite(favorites: &dyn FavoritesRepository, key: &str) -> Result<FavoriteConfiguration> {
    let key = key.trim();

    if let Ok(id) = Uuid::parse_str(key) {
        return favorites
            .find_by_id(id)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into());
    }

    let all = favorites.list()?;
    if let Some(found) = all.iter().find(|f| f.name == key) {
        return Ok(found.clone());
    }

    let prefix = key.to_lowercase();
    let mut matches = all
        .into_iter()
        .filter(|f| !prefix.is_empty() && f.id.to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(StoreError::Ambiguous(key.to_string()).into()),
        (None, _) => Err(StoreError::NotFound(key.to_string()).into()),
    }
}
