use crate::config::Config;
use crate::errors::AppResult;
use crate::models::report::WorkedReport;
use crate::utils::formatting::display_user;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use std::io::Write;

pub fn write_text<W: Write>(out: &mut W, report: &WorkedReport, cfg: &Config) -> AppResult<()> {
    let date = report.date.format("%Y-%m-%d");

    if report.is_empty() {
        match report.totals.as_slice() {
            [single] => writeln!(
                out,
                "No work sessions found for {} on {}.",
                display_user(cfg, single.user_id),
                date
            )?,
            _ => writeln!(out, "No records found for {}.", date)?,
        }
        return Ok(());
    }

    writeln!(out, "Worked time report for {}:\n", date)?;

    for total in report.totals.iter().filter(|t| t.total_minutes > 0) {
        writeln!(
            out,
            "{} - Total: {} minutes ({})",
            display_user(cfg, total.user_id),
            total.total_minutes,
            mins2readable(total.total_minutes, false, false)
        )?;

        if total.details.is_empty() {
            continue;
        }

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("In", 9),
            Column::new("Out", 9),
            Column::new("Min", 5),
        ]);
        for d in &total.details {
            table.add_row(vec![
                d.index.to_string(),
                format_time(&d.clock_in),
                format_time(&d.clock_out),
                d.minutes.to_string(),
            ]);
        }
        writeln!(out, "{}", table.render())?;
    }

    Ok(())
}
