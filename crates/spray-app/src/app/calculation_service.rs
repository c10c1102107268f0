//! Calculation Service - core use case
//!
//! 1. Validate the typed fields
//! 2. Run the calculation engine
//! 3. Refuse results that cannot be displayed
//! 4. Record the result in history

use spray_domain::model::SprayCalculation;
use spray_domain::repository::CalculationHistoryRepository;
use spray_domain::service::{compute, RawCalculationInput};
use spray_types::{
    FieldIssue, InputField, InvalidInputError, IssueKind, Result, StoreError,
};
use tracing::info;
use uuid::Uuid;

/// Validate and compute without touching any store
pub fn calculate(raw: &RawCalculationInput) -> Result<SprayCalculation> {
    let input = raw.validate()?;
    let calculation = compute(&input);

    // Validated inputs can still overflow, e.g. an area of 1e308 m².
    if !calculation.has_finite_results() {
        let issues = InputField::ALL
            .into_iter()
            .map(|f| FieldIssue::new(f, IssueKind::NotFinite))
            .collect();
        return Err(InvalidInputError::new(issues).into());
    }

    Ok(calculation)
}

/// Validate, compute, and append the result to history
pub fn calculate_and_record(
    raw: &RawCalculationInput,
    history: &dyn CalculationHistoryRepository,
) -> Result<SprayCalculation> {
    let calculation = calculate(raw)?;
    history.append(&calculation)?;
    info!(id = %calculation.id(), "calculation recorded");
    Ok(calculation)
}

/// Resolve a calculation from `latest`, a full id, or a unique id prefix
pub fn find_calculation(
    history: &dyn CalculationHistoryRepository,
    key: &str,
) -> Result<SprayCalculation> {
    let key = key.trim();

    if key.eq_ignore_ascii_case("latest") || key.eq_ignore_ascii_case("last") {
        return history
            .list()?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into());
    }

    if let Ok(id) = Uuid::parse_str(key) {
        return history
            .find_by_id(id)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into());
    }

    let prefix = key.to_lowercase();
    let mut matches = history
        .list()?
        .into_iter()
        .filter(|c| c.id().to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(StoreError::Ambiguous(key.to_string()).into()),
        (None, _) => Err(StoreError::NotFound(key.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spray_domain::model::AreaUnit;
    use spray_domain::repository::InMemoryHistoryRepository;
    use spray_types::Error;

    fn raw(area: &str, spray: &str, chemical: &str, tank: &str) -> RawCalculationInput {
        RawCalculationInput::new(area, AreaUnit::Hectares, spray, chemical, tank)
    }

    #[test]
    fn test_calculate_from_text() {
        let calc = calculate(&raw("15", "300", "3", "1000")).unwrap();
        assert_eq!(calc.full_tanks(), 4);
        assert!(calc.has_partial_tank());
    }

    #[test]
    fn test_invalid_input_never_reaches_history() {
        let history = InMemoryHistoryRepository::new();
        let err = calculate_and_record(&raw("", "300", "3", "1000"), &history).unwrap_err();
        match err {
            Error::InvalidInput(e) => assert_eq!(e.fields(), vec![InputField::FieldArea]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_tank_capacity_rejected_before_engine() {
        let err = calculate(&raw("10", "200", "2", "0")).unwrap_err();
        match err {
            Error::InvalidInput(e) => {
                assert_eq!(
                    e.issues,
                    vec![FieldIssue::new(InputField::TankCapacity, IssueKind::NotPositive)]
                )
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let err = calculate(&raw("1e308", "1e10", "1", "1000")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_calculate_and_record_appends() {
        let history = InMemoryHistoryRepository::new();
        let calc = calculate_and_record(&raw("10", "200", "2", "1000"), &history).unwrap();
        assert_eq!(history.list().unwrap(), vec![calc]);
    }

    #[test]
    fn test_find_calculation_by_key() {
        let history = InMemoryHistoryRepository::new();
        let older = calculate_and_record(&raw("1", "200", "2", "1000"), &history).unwrap();
        let newer = calculate_and_record(&raw("2", "200", "2", "1000"), &history).unwrap();

        assert_eq!(find_calculation(&history, "latest").unwrap(), newer);
        assert_eq!(
            find_calculation(&history, &older.id().to_string()).unwrap(),
            older
        );
        let short = &older.id().to_string()[..8];
        if !newer.id().to_string().starts_with(short) {
            assert_eq!(find_calculation(&history, short).unwrap(), older);
        }
    }

    #[test]
    fn test_find_calculation_missing_and_ambiguous() {
        let history = InMemoryHistoryRepository::new();
        assert!(matches!(
            find_calculation(&history, "latest"),
            Err(Error::Store(StoreError::NotFound(_)))
        ));

        calculate_and_record(&raw("1", "200", "2", "1000"), &history).unwrap();
        calculate_and_record(&raw("2", "200", "2", "1000"), &history).unwrap();
        // Every id matches the empty prefix
        assert!(matches!(
            find_calculation(&history, ""),
            Err(Error::Store(StoreError::Ambiguous(_)))
        ));
        assert!(matches!(
            find_calculation(&history, "zzzz"),
            Err(Error::Store(StoreError::NotFound(_)))
        ));
    }
}
