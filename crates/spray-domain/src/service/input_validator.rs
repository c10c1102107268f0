//! Text-field input boundary
//!
//! Everything the engine receives passes through here first. Values are
//! typed as text, possibly with a comma decimal separator.

use serde::{Deserialize, Serialize};
use spray_types::{FieldIssue, InputField, InvalidInputError, IssueKind};

use crate::model::{AreaUnit, CalculationInput, FavoriteConfiguration};

/// Parse a decimal number typed by a user. Accepts `,` as decimal separator.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

/// The four form fields as typed, plus the selected unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalculationInput {
    pub field_area: String,
    pub area_unit: AreaUnit,
    pub spray_rate: String,
    pub chemical_rate: String,
    pub tank_capacity: String,
}

impl RawCalculationInput {
    pub fn new(
        field_area: impl Into<String>,
        area_unit: AreaUnit,
        spray_rate: impl Into<String>,
        chemical_rate: impl Into<String>,
        tank_capacity: impl Into<String>,
    ) -> Self {
        Self {
            field_area: field_area.into(),
            area_unit,
            spray_rate: spray_rate.into(),
            chemical_rate: chemical_rate.into(),
            tank_capacity: tank_capacity.into(),
        }
    }

    /// Fill the form from a saved favorite; only the area is left to type
    pub fn from_favorite(favorite: &FavoriteConfiguration, field_area: impl Into<String>) -> Self {
        Self {
            field_area: field_area.into(),
            area_unit: favorite.area_unit,
            spray_rate: favorite.spray_rate.to_string(),
            chemical_rate: favorite.chemical_rate.to_string(),
            tank_capacity: favorite.tank_capacity.to_string(),
        }
    }

    fn text(&self, field: InputField) -> &str {
        match field {
            InputField::FieldArea => &self.field_area,
            InputField::SprayRate => &self.spray_rate,
            InputField::ChemicalRate => &self.chemical_rate,
            InputField::TankCapacity => &self.tank_capacity,
        }
    }

    /// Parse and range-check every field.
    ///
    /// All problems are collected so each offending field can be flagged at
    /// once. Field area and chemical rate may be zero; spray rate and tank
    /// capacity must be positive, because the engine divides by them.
    pub fn validate(&self) -> Result<CalculationInput, InvalidInputError> {
        let mut issues = Vec::new();
        let mut values = [0.0_f64; 4];

        for (slot, field) in InputField::ALL.into_iter().enumerate() {
            match check_field(field, self.text(field)) {
                Ok(value) => values[slot] = value,
                Err(kind) => issues.push(FieldIssue::new(field, kind)),
            }
        }

        if !issues.is_empty() {
            return Err(InvalidInputError::new(issues));
        }

        let [field_area, spray_rate, chemical_rate, tank_capacity] = values;
        Ok(CalculationInput::new(
            field_area,
            self.area_unit,
            spray_rate,
            chemical_rate,
            tank_capacity,
        ))
    }
}

fn check_field(field: InputField, text: &str) -> Result<f64, IssueKind> {
    if text.trim().is_empty() {
        return Err(IssueKind::Empty);
    }
    let value = parse_number(text).ok_or(IssueKind::NotANumber)?;
    if !value.is_finite() {
        return Err(IssueKind::NotFinite);
    }
    match field {
        InputField::FieldArea | InputField::ChemicalRate if value < 0.0 => Err(IssueKind::Negative),
        InputField::SprayRate | InputField::TankCapacity if value <= 0.0 => {
            Err(IssueKind::NotPositive)
        }
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(area: &str, spray: &str, chemical: &str, tank: &str) -> RawCalculationInput {
        RawCalculationInput::new(area, AreaUnit::Hectares, spray, chemical, tank)
    }

    #[test]
    fn test_parse_number_accepts_comma() {
        assert_eq!(parse_number("12,5"), Some(12.5));
        assert_eq!(parse_number(" 200 "), Some(200.0));
        assert_eq!(parse_number("0.75"), Some(0.75));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_valid_input() {
        let input = raw("15", "300", "3", "1000").validate().unwrap();
        assert_eq!(input, CalculationInput::hectares(15.0, 300.0, 3.0, 1000.0));
    }

    #[test]
    fn test_comma_decimal_input() {
        let input = raw("2,5", "150,5", "0,75", "600").validate().unwrap();
        assert_eq!(input.field_area, 2.5);
        assert_eq!(input.spray_rate, 150.5);
        assert_eq!(input.chemical_rate, 0.75);
    }

    #[test]
    fn test_all_empty_fields_reported_together() {
        let err = raw("", "200", " ", "").validate().unwrap_err();
        assert_eq!(
            err.fields(),
            vec![InputField::FieldArea, InputField::ChemicalRate, InputField::TankCapacity]
        );
        assert!(err.issues.iter().all(|i| i.kind == IssueKind::Empty));
    }

    #[test]
    fn test_not_a_number() {
        let err = raw("10", "dużo", "2", "1000").validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::new(InputField::SprayRate, IssueKind::NotANumber)]
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = raw("inf", "200", "NaN", "1000").validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new(InputField::FieldArea, IssueKind::NotFinite),
                FieldIssue::new(InputField::ChemicalRate, IssueKind::NotFinite),
            ]
        );
    }

    #[test]
    fn test_range_checks() {
        let err = raw("-1", "0", "-2", "0").validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new(InputField::FieldArea, IssueKind::Negative),
                FieldIssue::new(InputField::SprayRate, IssueKind::NotPositive),
                FieldIssue::new(InputField::ChemicalRate, IssueKind::Negative),
                FieldIssue::new(InputField::TankCapacity, IssueKind::NotPositive),
            ]
        );
    }

    #[test]
    fn test_zero_area_and_zero_chemical_allowed() {
        let input = raw("0", "200", "0", "1000").validate().unwrap();
        assert_eq!(input.field_area, 0.0);
        assert_eq!(input.chemical_rate, 0.0);
    }

    #[test]
    fn test_from_favorite_round_trips() {
        let fav = FavoriteConfiguration::new("Kukurydza", 180.5, 1.25, 2500.0, AreaUnit::Ares);
        let input = RawCalculationInput::from_favorite(&fav, "320").validate().unwrap();
        assert_eq!(input, fav.to_input(320.0));
    }
}
