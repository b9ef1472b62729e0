use crate::cli::commands::Context;
use crate::core::attendance::AttendanceLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::display_user;

pub fn handle(ctx: &Context) -> AppResult<()> {
    let user = ctx.actor()?;
    let mut pool = ctx.open_pool()?;

    let out = AttendanceLogic::clock_out(&mut pool, user, ctx.now())?;

    success(format!(
        "{} clocked out at {} on {}. Total time: {} minutes",
        display_user(ctx.cfg, user),
        out.session.clock_out_str(),
        out.session.date_str(),
        out.rounded_minutes
    ));
    Ok(())
}
