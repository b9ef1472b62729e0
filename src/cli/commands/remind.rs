use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::reminder::{Poll, ReminderScheduler};
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::thread;
use std::time::Duration;

/// Upper bound on one sleep in watch mode, so clock changes are picked up.
const MAX_NAP: Duration = Duration::from_secs(60);

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Remind { watch } = cmd {
        let mut pool = ctx.open_pool()?;
        let scheduler =
            ReminderScheduler::from_minutes(ctx.cfg.reminder_interval_minutes, ctx.clock);

        loop {
            match scheduler.poll(&mut pool)? {
                Poll::Due => println!("🔔 {}", ctx.cfg.reminder_message),
                Poll::NotYet { next } if !*watch => {
                    info(format!("Next reminder not before {}.", next.format("%Y-%m-%d %H:%M:%S")));
                }
                Poll::NotYet { next } => {
                    thread::sleep(scheduler.wait_for(next).clamp(Duration::from_secs(1), MAX_NAP));
                    continue;
                }
            }

            if !*watch {
                break;
            }
        }
    }

    Ok(())
}
