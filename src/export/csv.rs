use crate::errors::AppResult;
use crate::models::report::WorkedReport;
use crate::utils::time::format_time;
use csv::Writer;
use std::io::Write;

/// One row per itemized session; members without detail lines get a single
/// row with empty session columns.
pub fn write_csv<W: Write>(out: &mut W, report: &WorkedReport) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record([
        "date",
        "user_id",
        "total_minutes",
        "index",
        "clock_in",
        "clock_out",
        "minutes",
    ])?;

    let date = report.date.format("%Y-%m-%d").to_string();

    for total in report.totals.iter().filter(|t| t.total_minutes > 0) {
        let user = total.user_id.to_string();
        let sum = total.total_minutes.to_string();

        if total.details.is_empty() {
            wtr.write_record([date.as_str(), user.as_str(), sum.as_str(), "", "", "", ""])?;
            continue;
        }

        for d in &total.details {
            wtr.write_record([
                date.clone(),
                user.clone(),
                sum.clone(),
                d.index.to_string(),
                format_time(&d.clock_in),
                format_time(&d.clock_out),
                d.minutes.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
