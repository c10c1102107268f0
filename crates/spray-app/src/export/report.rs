//! Paginated plain-text report

use spray_domain::model::SprayCalculation;
use spray_domain::service::{describe_tank_fills, format_quantity, NumberLocale};

use crate::labels::Labels;

/// Lines per page, header and footer included
pub const DEFAULT_PAGE_LINES: usize = 60;

const HEADER_LINES: usize = 2;
const FOOTER_LINES: usize = 2;
const LABEL_WIDTH: usize = 28;
const RULE_WIDTH: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// 1-based
    pub number: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub pages: Vec<ReportPage>,
}

impl Report {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages joined with form feeds, ready to print or write to a file
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{000C}\n")
    }
}

/// Render calculations into fixed-height pages.
///
/// A calculation block is never split across pages unless it is taller
/// than a whole page body.
pub fn render_report(
    calculations: &[SprayCalculation],
    labels: &Labels,
    locale: &NumberLocale,
    page_lines: usize,
) -> Report {
    let body_capacity = page_lines
        .saturating_sub(HEADER_LINES + FOOTER_LINES)
        .max(1);

    let blocks: Vec<Vec<String>> = if calculations.is_empty() {
        vec![vec![labels.no_history.to_string()]]
    } else {
        calculations
            .iter()
            .map(|c| calculation_block(c, labels, locale))
            .collect()
    };

    let mut bodies: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for block in blocks {
        if !current.is_empty() && current.len() + block.len() > body_capacity {
            bodies.push(std::mem::take(&mut current));
        }
        for line in block {
            if current.len() == body_capacity {
                bodies.push(std::mem::take(&mut current));
            }
            current.push(line);
        }
    }
    if !current.is_empty() {
        bodies.push(current);
    }

    let total = bodies.len();
    let pages = bodies
        .into_iter()
        .enumerate()
        .map(|(i, body)| {
            let number = i + 1;
            let mut lines = Vec::with_capacity(body.len() + HEADER_LINES + FOOTER_LINES);
            lines.push(labels.app_title.to_string());
            lines.push("=".repeat(RULE_WIDTH));
            lines.extend(body);
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(format!(
                "{} | {} {}/{}",
                labels.signature, labels.page, number, total
            ));
            ReportPage { number, lines }
        })
        .collect();

    Report { pages }
}

fn row(label: &str, value: String) -> String {
    format!("  {:<width$} {}", format!("{}:", label), value, width = LABEL_WIDTH)
}

fn calculation_block(c: &SprayCalculation, labels: &Labels, locale: &NumberLocale) -> Vec<String> {
    let q = |v: f64| format_quantity(v, locale);

    let mut lines = vec![
        format!("{}: {}", labels.date, c.created_at().format("%Y-%m-%d %H:%M UTC")),
        String::new(),
        labels.parameters.to_string(),
        row(labels.field_area, format!("{} {}", q(c.field_area()), c.area_unit())),
        row(labels.spray_rate, format!("{} l/ha", q(c.spray_rate()))),
        row(labels.chemical_rate, format!("{} l/ha", q(c.chemical_rate()))),
        row(labels.tank_capacity, format!("{} l", q(c.tank_capacity()))),
        String::new(),
        labels.results.to_string(),
        row(labels.working_fluid, format!("{} l", q(c.total_working_fluid()))),
        row(labels.total_chemical_to_buy, format!("{} l", q(c.total_chemical()))),
        row(
            labels.tank_fills,
            describe_tank_fills(c, labels.full_tanks, labels.partial_tank),
        ),
        String::new(),
        labels.full_tank_composition.to_string(),
        format!(
            "  {}: {} l + {}: {} l",
            labels.water,
            q(c.water_per_full_tank()),
            labels.chemical,
            q(c.chemical_per_tank())
        ),
    ];

    if c.has_partial_tank() {
        lines.push(labels.partial_tank_composition.to_string());
        lines.push(format!(
            "  {}: {} l + {}: {} l",
            labels.water,
            q(c.water_for_partial_tank()),
            labels.chemical,
            q(c.chemical_for_partial_tank())
        ));
    }

    lines.push(String::new());
    lines
}
