use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::db::queries::list_sessions;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::display_user;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Sessions {
        user,
        date: date_arg,
    } = cmd
    {
        let d = date::parse_date_or(date_arg.as_ref(), ctx.today()).map_err(AppError::InvalidDate)?;
        let pool = ctx.open_pool()?;

        let sessions = list_sessions(&pool.conn, *user, &d)?;

        if sessions.is_empty() {
            println!("No sessions for {} on {}.", display_user(ctx.cfg, *user), d);
            return Ok(());
        }

        println!("Sessions for {} on {}:\n", display_user(ctx.cfg, *user), d);

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("In", 9),
            Column::new("Out", 9),
            Column::new("Min", 5),
        ]);

        for (idx, s) in sessions.iter().enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                s.clock_in_str(),
                s.clock_out_str(),
                s.rounded_minutes()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
