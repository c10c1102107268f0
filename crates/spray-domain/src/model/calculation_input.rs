//! Parsed calculation parameters

use serde::{Deserialize, Serialize};

use super::AreaUnit;

/// The four numbers and the area unit one calculation is made from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub field_area: f64,
    pub area_unit: AreaUnit,
    /// l/ha
    pub spray_rate: f64,
    /// l/ha
    pub chemical_rate: f64,
    /// l
    pub tank_capacity: f64,
}

impl CalculationInput {
    pub fn new(
        field_area: f64,
        area_unit: AreaUnit,
        spray_rate: f64,
        chemical_rate: f64,
        tank_capacity: f64,
    ) -> Self {
        Self {
            field_area,
            area_unit,
            spray_rate,
            chemical_rate,
            tank_capacity,
        }
    }

    /// Shorthand for an area given in hectares
    pub fn hectares(field_area: f64, spray_rate: f64, chemical_rate: f64, tank_capacity: f64) -> Self {
        Self::new(field_area, AreaUnit::Hectares, spray_rate, chemical_rate, tank_capacity)
    }
}
