//! Domain model types

pub mod area_unit;
pub mod calculation_input;
pub mod favorite;
pub mod spray_calculation;

pub use area_unit::AreaUnit;
pub use calculation_input::CalculationInput;
pub use favorite::FavoriteConfiguration;
pub use spray_calculation::{CalculationBreakdown, SprayCalculation, PARTIAL_TANK_EPSILON_LITERS};
