use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::correct::AddMinutesLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::display_user;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Addminutes {
        user,
        date: date_str,
        minutes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let mut pool = ctx.open_pool()?;

        let session = AddMinutesLogic::apply(&mut pool, *user, d, *minutes)?;

        success(format!(
            "Added {} minute(s) for {} on {}: {} - {}",
            minutes,
            display_user(ctx.cfg, *user),
            session.date_str(),
            session.clock_in_str(),
            session.clock_out_str()
        ));
    }

    Ok(())
}
