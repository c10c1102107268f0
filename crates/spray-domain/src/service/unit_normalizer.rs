//! Area normalization to hectares

use crate::model::AreaUnit;

/// Convert an area in `unit` to hectares
pub fn to_hectares(value: f64, unit: AreaUnit) -> f64 {
    value * unit.to_hectares()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_unit_equals_factor() {
        assert_eq!(to_hectares(1.0, AreaUnit::Hectares), 1.0);
        assert_eq!(to_hectares(1.0, AreaUnit::Ares), 0.01);
        assert_eq!(to_hectares(1.0, AreaUnit::SquareMeters), 0.0001);
    }

    #[test]
    fn test_every_unit_has_positive_factor() {
        for unit in AreaUnit::ALL {
            assert!(unit.to_hectares() > 0.0, "{unit} factor must be positive");
        }
    }

    #[test]
    fn test_common_field_sizes() {
        assert_relative_eq!(to_hectares(500.0, AreaUnit::Ares), 5.0);
        assert_relative_eq!(to_hectares(25_000.0, AreaUnit::SquareMeters), 2.5);
        assert_relative_eq!(to_hectares(12.75, AreaUnit::Hectares), 12.75);
    }
}
