use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = ctx.open_pool()?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
