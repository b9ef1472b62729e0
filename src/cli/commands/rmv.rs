use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::remove::RemoveLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::display_user;
use tracing::info;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Rmv {
        user,
        date: date_str,
        index,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let mut pool = ctx.open_pool()?;

        let removed = RemoveLogic::apply(&mut pool, *user, d, *index)?;
        info!(
            actor = ?ctx.actor,
            member = *user,
            date = %d,
            index = *index,
            clock_in = %removed.clock_in_str(),
            "session removed"
        );

        success(format!(
            "Removed session for {} on {} at index {} ({} - {}).",
            display_user(ctx.cfg, *user),
            d,
            index,
            removed.clock_in_str(),
            removed.clock_out_str()
        ));
    }

    Ok(())
}
