use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::worked::WorkedLogic;
use crate::errors::{AppError, AppResult};
use crate::export::write_report;
use crate::utils::date;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Worked {
        user,
        date: date_arg,
        format,
    } = cmd
    {
        let d = date::parse_date_or(date_arg.as_ref(), ctx.today()).map_err(AppError::InvalidDate)?;
        let mut pool = ctx.open_pool()?;

        let roster = ctx.cfg.roster();
        let report = WorkedLogic::report(&mut pool, d, *user, &roster)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &report, *format, ctx.cfg)?;
        out.flush()?;
    }

    Ok(())
}
