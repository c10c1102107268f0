//! Saved sprayer configurations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AreaUnit, CalculationInput, SprayCalculation};

/// Named, reusable rate and capacity parameters
///
/// Holds no computed results; the field area is supplied again each time
/// a favorite is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteConfiguration {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// l/ha
    pub spray_rate: f64,
    /// l/ha
    pub chemical_rate: f64,
    /// l
    pub tank_capacity: f64,
    pub area_unit: AreaUnit,
}

impl FavoriteConfiguration {
    pub fn new(
        name: impl Into<String>,
        spray_rate: f64,
        chemical_rate: f64,
        tank_capacity: f64,
        area_unit: AreaUnit,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            spray_rate,
            chemical_rate,
            tank_capacity,
            area_unit,
        }
    }

    /// Keep the parameters of a finished calculation under a name
    pub fn from_calculation(name: impl Into<String>, calculation: &SprayCalculation) -> Self {
        Self::new(
            name,
            calculation.spray_rate(),
            calculation.chemical_rate(),
            calculation.tank_capacity(),
            calculation.area_unit(),
        )
    }

    /// Combine the saved parameters with a field area in the saved unit
    pub fn to_input(&self, field_area: f64) -> CalculationInput {
        CalculationInput::new(
            field_area,
            self.area_unit,
            self.spray_rate,
            self.chemical_rate,
            self.tank_capacity,
        )
    }
}
