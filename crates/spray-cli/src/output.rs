//! Output formatting module

use spray_app::labels::Labels;
use spray_domain::model::{CalculationBreakdown, FavoriteConfiguration, SprayCalculation};
use spray_domain::service::{
    describe_tank_fills, describe_tank_fills_with_volume, format_quantity, NumberLocale,
};
use spray_types::{OutputFormat, Result};

const LABEL_WIDTH: usize = 28;

fn short_id(id: uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn print_row(label: &str, value: String) {
    println!("  {:<width$} {}", format!("{}:", label), value, width = LABEL_WIDTH);
}

pub fn output_calculation(
    output_format: OutputFormat,
    calculation: &SprayCalculation,
    labels: &Labels,
    locale: &NumberLocale,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&calculation.breakdown())?;
        println!("{}", content);
        return Ok(());
    }

    let q = |v: f64| format_quantity(v, locale);

    println!("\n{}", labels.app_title);
    println!("{}", "=".repeat(labels.app_title.chars().count()));
    println!("{}", labels.parameters);
    print_row(
        labels.field_area,
        format!("{} {}", q(calculation.field_area()), calculation.area_unit()),
    );
    print_row(labels.spray_rate, format!("{} l/ha", q(calculation.spray_rate())));
    print_row(labels.chemical_rate, format!("{} l/ha", q(calculation.chemical_rate())));
    print_row(labels.tank_capacity, format!("{} l", q(calculation.tank_capacity())));

    println!("\n{}", labels.results);
    print_row(
        labels.working_fluid,
        format!("{} l", q(calculation.total_working_fluid())),
    );
    print_row(
        labels.total_chemical_to_buy,
        format!("{} l", q(calculation.total_chemical())),
    );
    print_row(
        labels.tank_fills,
        describe_tank_fills_with_volume(calculation, labels.full_tanks, labels.partial_tank, locale),
    );

    println!("\n{}", labels.full_tank_composition);
    print_row(labels.water, format!("{} l", q(calculation.water_per_full_tank())));
    print_row(labels.chemical, format!("{} l", q(calculation.chemical_per_tank())));

    if calculation.has_partial_tank() {
        println!("\n{}", labels.partial_tank_composition);
        print_row(labels.water, format!("{} l", q(calculation.water_for_partial_tank())));
        print_row(labels.chemical, format!("{} l", q(calculation.chemical_for_partial_tank())));
    }

    println!("\nId: {}", calculation.id());
    Ok(())
}

pub fn output_history(
    output_format: OutputFormat,
    calculations: &[SprayCalculation],
    limit: usize,
    labels: &Labels,
    locale: &NumberLocale,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<CalculationBreakdown> = calculations
            .iter()
            .take(limit)
            .map(|c| c.breakdown())
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", labels.history);
    println!("{}", "=".repeat(labels.history.chars().count()));

    if calculations.is_empty() {
        println!("{}", labels.no_history);
        return Ok(());
    }

    println!(
        "{:<8}  {:<11}  {:>18}  {:>14}  {:>10}  {}",
        "Id", labels.date, labels.field_area, labels.working_fluid, labels.chemical, labels.tank_fills
    );
    println!("{}", "-".repeat(96));

    for c in calculations.iter().take(limit) {
        println!(
            "{:<8}  {:<11}  {:>18}  {:>14}  {:>10}  {}",
            short_id(c.id()),
            c.created_at().format("%m/%d %H:%M"),
            format!("{} {}", format_quantity(c.field_area(), locale), c.area_unit()),
            format!("{} l", format_quantity(c.total_working_fluid(), locale)),
            format!("{} l", format_quantity(c.total_chemical(), locale)),
            describe_tank_fills(c, labels.full_tanks, labels.partial_tank),
        );
    }

    if calculations.len() > limit {
        println!("... {} more", calculations.len() - limit);
    }

    Ok(())
}

pub fn output_favorites(
    output_format: OutputFormat,
    favorites: &[FavoriteConfiguration],
    labels: &Labels,
    locale: &NumberLocale,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(favorites)?);
        return Ok(());
    }

    println!("{}", labels.favorites);
    println!("{}", "=".repeat(labels.favorites.chars().count()));

    if favorites.is_empty() {
        println!("{}", labels.no_favorites);
        return Ok(());
    }

    for f in favorites {
        println!("{}  {} ({})", short_id(f.id), f.name, f.area_unit);
        println!(
            "    {}: {} l/ha, {}: {} l/ha, {}: {} l",
            labels.spray_rate,
            format_quantity(f.spray_rate, locale),
            labels.chemical_rate,
            format_quantity(f.chemical_rate, locale),
            labels.tank_capacity,
            format_quantity(f.tank_capacity, locale)
        );
    }

    Ok(())
}
