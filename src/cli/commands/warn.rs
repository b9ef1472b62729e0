use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::warn::InfractionLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_warnings};
use crate::utils::formatting::display_user;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Warn { user, reset, show } = cmd {
        let mut pool = ctx.open_pool()?;
        let max = ctx.cfg.max_warnings;
        let who = display_user(ctx.cfg, *user);

        if *reset {
            InfractionLogic::reset(&mut pool, *user)?;
            success(format!("Warnings for {} reset to 0/{}.", who, max));
            return Ok(());
        }

        if *show {
            let count = InfractionLogic::query(&mut pool, *user)?;
            println!(
                "{} has {}{}/{}{} warning(s).",
                who,
                color_for_warnings(count, max),
                count,
                max,
                RESET
            );
            return Ok(());
        }

        let count = InfractionLogic::increment(&mut pool, *user, max)?;
        success(format!("{} now has {}/{} warning(s).", who, count, max));
    }

    Ok(())
}
