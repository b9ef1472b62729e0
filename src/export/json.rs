use crate::errors::AppResult;
use crate::models::report::WorkedReport;
use std::io::Write;

/// Pretty-printed JSON of the whole report.
pub fn write_json<W: Write>(out: &mut W, report: &WorkedReport) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
