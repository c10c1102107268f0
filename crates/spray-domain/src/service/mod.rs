//! Domain services

pub mod formatting;
pub mod input_validator;
pub mod spray_calculator;
pub mod unit_normalizer;

pub use formatting::{
    describe_tank_fills, describe_tank_fills_with_volume, format_quantity, NumberLocale,
};
pub use input_validator::{parse_number, RawCalculationInput};
pub use spray_calculator::{compute, compute_with_identity};
pub use unit_normalizer::to_hectares;
