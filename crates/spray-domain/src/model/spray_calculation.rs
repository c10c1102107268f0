//! Spray calculation result record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AreaUnit, CalculationInput};
use crate::service::unit_normalizer::to_hectares;

/// Remainders at or below this many litres count as floating-point noise,
/// not as a partial tank.
pub const PARTIAL_TANK_EPSILON_LITERS: f64 = 0.01;

/// Immutable result of one calculation
///
/// Only identity, timestamp and the raw inputs are stored. Every derived
/// quantity is recomputed from them on access, so none can drift from its
/// inputs, including after a round trip through a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprayCalculation {
    id: Uuid,
    created_at: DateTime<Utc>,
    field_area: f64,
    area_unit: AreaUnit,
    spray_rate: f64,
    chemical_rate: f64,
    tank_capacity: f64,
}

impl SprayCalculation {
    pub(crate) fn from_parts(id: Uuid, created_at: DateTime<Utc>, input: &CalculationInput) -> Self {
        Self {
            id,
            created_at,
            field_area: input.field_area,
            area_unit: input.area_unit,
            spray_rate: input.spray_rate,
            chemical_rate: input.chemical_rate,
            tank_capacity: input.tank_capacity,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn field_area(&self) -> f64 {
        self.field_area
    }

    pub fn area_unit(&self) -> AreaUnit {
        self.area_unit
    }

    /// l/ha
    pub fn spray_rate(&self) -> f64 {
        self.spray_rate
    }

    /// l/ha
    pub fn chemical_rate(&self) -> f64 {
        self.chemical_rate
    }

    /// l
    pub fn tank_capacity(&self) -> f64 {
        self.tank_capacity
    }

    /// The parameters this result was computed from
    pub fn input(&self) -> CalculationInput {
        CalculationInput::new(
            self.field_area,
            self.area_unit,
            self.spray_rate,
            self.chemical_rate,
            self.tank_capacity,
        )
    }

    pub fn field_area_in_hectares(&self) -> f64 {
        to_hectares(self.field_area, self.area_unit)
    }

    /// Water plus chemical for the whole field, in litres
    pub fn total_working_fluid(&self) -> f64 {
        self.field_area_in_hectares() * self.spray_rate
    }

    /// Chemical product to buy for the whole field, in litres
    pub fn total_chemical(&self) -> f64 {
        self.field_area_in_hectares() * self.chemical_rate
    }

    /// Working fluid expressed in tank fills, before truncation
    pub fn tank_fill_ratio(&self) -> f64 {
        self.total_working_fluid() / self.tank_capacity
    }

    /// Complete tank fills. Truncates toward zero; a partial fill never
    /// rounds up. Non-finite ratios saturate (NaN becomes 0).
    pub fn full_tanks(&self) -> i64 {
        self.tank_fill_ratio() as i64
    }

    /// Litres left after all full tanks (truncating remainder)
    pub fn partial_tank_volume(&self) -> f64 {
        self.total_working_fluid() % self.tank_capacity
    }

    pub fn has_partial_tank(&self) -> bool {
        self.partial_tank_volume() > PARTIAL_TANK_EPSILON_LITERS
    }

    /// Chemical in litres per full tank.
    ///
    /// Zero working fluid short-circuits to 0. A zero spray rate always
    /// implies zero working fluid, so the division below never sees it.
    pub fn chemical_per_tank(&self) -> f64 {
        if self.total_working_fluid() > 0.0 {
            self.chemical_fraction() * self.tank_capacity
        } else {
            0.0
        }
    }

    pub fn chemical_for_partial_tank(&self) -> f64 {
        if self.total_working_fluid() > 0.0 {
            self.chemical_fraction() * self.partial_tank_volume()
        } else {
            0.0
        }
    }

    /// Water to pour into each full tank
    pub fn water_per_full_tank(&self) -> f64 {
        self.tank_capacity - self.chemical_per_tank()
    }

    /// Water to pour into the last, partial tank
    pub fn water_for_partial_tank(&self) -> f64 {
        self.partial_tank_volume() - self.chemical_for_partial_tank()
    }

    fn chemical_fraction(&self) -> f64 {
        self.chemical_rate / self.spray_rate
    }

    /// False when a degenerate input (zero tank capacity, infinite area)
    /// produced a value that cannot be shown to a user.
    pub fn has_finite_results(&self) -> bool {
        [
            self.field_area_in_hectares(),
            self.total_working_fluid(),
            self.total_chemical(),
            self.tank_fill_ratio(),
            self.partial_tank_volume(),
            self.chemical_per_tank(),
            self.chemical_for_partial_tank(),
            self.water_per_full_tank(),
            self.water_for_partial_tank(),
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Flatten raw and derived values for JSON output and exports
    pub fn breakdown(&self) -> CalculationBreakdown {
        CalculationBreakdown {
            id: self.id,
            created_at: self.created_at,
            field_area: self.field_area,
            area_unit: self.area_unit,
            spray_rate: self.spray_rate,
            chemical_rate: self.chemical_rate,
            tank_capacity: self.tank_capacity,
            field_area_in_hectares: self.field_area_in_hectares(),
            total_working_fluid: self.total_working_fluid(),
            total_chemical: self.total_chemical(),
            full_tanks: self.full_tanks(),
            partial_tank_volume: self.partial_tank_volume(),
            has_partial_tank: self.has_partial_tank(),
            chemical_per_tank: self.chemical_per_tank(),
            water_per_full_tank: self.water_per_full_tank(),
            chemical_for_partial_tank: self.chemical_for_partial_tank(),
            water_for_partial_tank: self.water_for_partial_tank(),
        }
    }
}

/// Snapshot of a calculation with every derived field evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub field_area: f64,
    pub area_unit: AreaUnit,
    pub spray_rate: f64,
    pub chemical_rate: f64,
    pub tank_capacity: f64,
    pub field_area_in_hectares: f64,
    pub total_working_fluid: f64,
    pub total_chemical: f64,
    pub full_tanks: i64,
    pub partial_tank_volume: f64,
    pub has_partial_tank: bool,
    pub chemical_per_tank: f64,
    pub water_per_full_tank: f64,
    pub chemical_for_partial_tank: f64,
    pub water_for_partial_tank: f64,
}
