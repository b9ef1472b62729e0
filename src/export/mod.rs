//! Worked-time report output (text table, JSON, CSV).

mod csv;
mod json;
mod text;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::text::write_text;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::report::WorkedReport;
use clap::ValueEnum;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Render `report` in `format` into `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &WorkedReport,
    format: ReportFormat,
    cfg: &Config,
) -> AppResult<()> {
    match format {
        ReportFormat::Text => write_text(out, report, cfg),
        ReportFormat::Json => write_json(out, report),
        ReportFormat::Csv => write_csv(out, report),
    }
}
