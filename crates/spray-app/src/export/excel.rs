//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use spray_domain::model::SprayCalculation;
use spray_domain::service::{describe_tank_fills_with_volume, NumberLocale};
use spray_types::{Error, Result};
use std::path::Path;

use crate::labels::Labels;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}

/// Export calculations to an Excel file, one worksheet per calculation
pub fn export_to_excel(
    calculations: &[SprayCalculation],
    labels: &Labels,
    locale: &NumberLocale,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    if calculations.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(labels.history).map_err(xlsx_err)?;
        sheet.write_string(0, 0, labels.no_history).map_err(xlsx_err)?;
    }

    for (index, calculation) in calculations.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        write_calculation_sheet(sheet, index + 1, calculation, labels, locale)?;
    }

    workbook.save(output_path).map_err(xlsx_err)?;

    Ok(())
}

fn write_calculation_sheet(
    sheet: &mut Worksheet,
    number: usize,
    c: &SprayCalculation,
    labels: &Labels,
    locale: &NumberLocale,
) -> Result<()> {
    // Sheet names are capped at 31 characters and may not contain ':'
    let name = format!("{} {}", number, c.created_at().format("%Y-%m-%d %H.%M"));
    sheet.set_name(&name).map_err(xlsx_err)?;
    sheet.set_column_width(0, 32).map_err(xlsx_err)?;
    sheet.set_column_width(1, 14).map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("0.00");

    sheet
        .write_string_with_format(0, 0, labels.app_title, &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(1, 0, labels.date).map_err(xlsx_err)?;
    sheet
        .write_string(1, 1, c.created_at().to_rfc3339())
        .map_err(xlsx_err)?;

    let area_unit = c.area_unit().to_string();
    let parameters: [(&str, f64, &str); 4] = [
        (labels.field_area, c.field_area(), area_unit.as_str()),
        (labels.spray_rate, c.spray_rate(), "l/ha"),
        (labels.chemical_rate, c.chemical_rate(), "l/ha"),
        (labels.tank_capacity, c.tank_capacity(), "l"),
    ];
    let results: [(&str, f64, &str); 6] = [
        (labels.working_fluid, c.total_working_fluid(), "l"),
        (labels.total_chemical_to_buy, c.total_chemical(), "l"),
        (labels.water, c.water_per_full_tank(), "l"),
        (labels.chemical, c.chemical_per_tank(), "l"),
        (labels.water, c.water_for_partial_tank(), "l"),
        (labels.chemical, c.chemical_for_partial_tank(), "l"),
    ];

    let mut row = 3;
    sheet
        .write_string_with_format(row, 0, labels.parameters, &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for (label, value, unit) in parameters {
        write_quantity_row(sheet, row, label, value, unit, &number_format)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, labels.results, &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for (label, value, unit) in &results[..2] {
        write_quantity_row(sheet, row, label, *value, unit, &number_format)?;
        row += 1;
    }
    sheet.write_string(row, 0, labels.tank_fills).map_err(xlsx_err)?;
    sheet
        .write_string(
            row,
            1,
            describe_tank_fills_with_volume(c, labels.full_tanks, labels.partial_tank, locale),
        )
        .map_err(xlsx_err)?;
    row += 2;

    sheet
        .write_string_with_format(row, 0, labels.full_tank_composition, &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for (label, value, unit) in &results[2..4] {
        write_quantity_row(sheet, row, label, *value, unit, &number_format)?;
        row += 1;
    }

    if c.has_partial_tank() {
        row += 1;
        sheet
            .write_string_with_format(row, 0, labels.partial_tank_composition, &header_format)
            .map_err(xlsx_err)?;
        row += 1;
        for (label, value, unit) in &results[4..] {
            write_quantity_row(sheet, row, label, *value, unit, &number_format)?;
            row += 1;
        }
    }

    Ok(())
}

fn write_quantity_row(
    sheet: &mut Worksheet,
    row: u32,
    label: &str,
    value: f64,
    unit: &str,
    number_format: &Format,
) -> Result<()> {
    sheet.write_string(row, 0, label).map_err(xlsx_err)?;
    write_number_cell(sheet, row, value, number_format)?;
    sheet.write_string(row, 2, unit).map_err(xlsx_err)?;
    Ok(())
}

/// Excel has no representation for infinities or NaN, so those go in as text
fn write_number_cell(sheet: &mut Worksheet, row: u32, value: f64, number_format: &Format) -> Result<()> {
    if value.is_finite() {
        sheet
            .write_number_with_format(row, 1, value, number_format)
            .map_err(xlsx_err)?;
    } else {
        sheet.write_string(row, 1, value.to_string()).map_err(xlsx_err)?;
    }
    Ok(())
}
