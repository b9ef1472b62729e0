use crate::cli::commands::Context;
use crate::core::attendance::AttendanceLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::display_user;

pub fn handle(ctx: &Context) -> AppResult<()> {
    let user = ctx.actor()?;
    let mut pool = ctx.open_pool()?;

    let session = AttendanceLogic::clock_in(&mut pool, user, ctx.now(), ctx.cfg.strict_open_session)?;

    success(format!(
        "{} clocked in at {} on {}",
        display_user(ctx.cfg, user),
        session.clock_in_str(),
        session.date_str()
    ));
    Ok(())
}
