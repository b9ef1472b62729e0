use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::ongoing::OngoingLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::display_user;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Ongoing { user, stop } = cmd {
        let mut pool = ctx.open_pool()?;
        let today = ctx.today();

        if *stop && let Some(u) = user {
            let stopped = OngoingLogic::stop(&mut pool, *u, today)?;
            success(format!(
                "Stopped and removed clock-in for {} at {}.",
                display_user(ctx.cfg, *u),
                stopped.clock_in_str()
            ));
            return Ok(());
        }

        let sessions = OngoingLogic::list(&mut pool, *user, today)?;

        if sessions.is_empty() {
            info("No ongoing work sessions found.");
            return Ok(());
        }

        println!("Ongoing work sessions:\n");
        for s in sessions {
            if s.date == today {
                println!(
                    "{} - Clocked in at {}",
                    display_user(ctx.cfg, s.user_id),
                    s.clock_in_str()
                );
            } else {
                println!(
                    "{} - Clocked in at {} on {}",
                    display_user(ctx.cfg, s.user_id),
                    s.clock_in_str(),
                    s.date_str()
                );
            }
        }
    }

    Ok(())
}
