//! CSV export of calculation history
//!
//! One row per calculation with raw inputs and every derived column.

use std::io::Write;
use std::path::Path;

use spray_domain::model::SprayCalculation;
use spray_types::Result;

/// Write calculations as CSV, header row first
pub fn write_history_csv<W: Write>(calculations: &[SprayCalculation], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for calculation in calculations {
        wtr.serialize(calculation.breakdown())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export calculations to a CSV file
pub fn export_history_csv(calculations: &[SprayCalculation], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_history_csv(calculations, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spray_domain::model::{AreaUnit, CalculationInput};
    use spray_domain::service::compute_with_identity;
    use uuid::Uuid;

    #[test]
    fn test_header_and_rows() {
        let at = Utc.with_ymd_and_hms(2024, 5, 2, 6, 0, 0).unwrap();
        let calcs = vec![
            compute_with_identity(
                &CalculationInput::hectares(15.0, 300.0, 3.0, 1000.0),
                Uuid::nil(),
                at,
            ),
            compute_with_identity(
                &CalculationInput::new(500.0, AreaUnit::Ares, 200.0, 2.0, 1000.0),
                Uuid::nil(),
                at,
            ),
        ];

        let mut buf = Vec::new();
        write_history_csv(&calcs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,created_at,field_area,area_unit,spray_rate"));
        assert!(lines[0].contains("full_tanks"));
        assert!(lines[0].ends_with("water_for_partial_tank"));
        assert!(lines[1].contains(",ha,"));
        assert!(lines[1].contains(",4,500.0,true,"));
        assert!(lines[2].contains(",ar,"));
    }

    #[test]
    fn test_empty_history_writes_nothing() {
        let mut buf = Vec::new();
        write_history_csv(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let calcs = vec![spray_domain::service::compute(&CalculationInput::hectares(
            1.0, 200.0, 2.0, 1000.0,
        ))];
        export_history_csv(&calcs, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
