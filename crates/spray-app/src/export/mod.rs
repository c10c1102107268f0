//! Export of finished calculations
//!
//! Renderers only format already-derived fields; nothing is computed here.

pub mod excel;
pub mod report;

pub use excel::export_to_excel;
pub use report::{render_report, Report, ReportPage, DEFAULT_PAGE_LINES};
