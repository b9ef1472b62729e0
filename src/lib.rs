//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the attendance
//! logic behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands::{self, Context};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::policy;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::clock::{Clock, FixedClock, SystemClock};
use crate::utils::time::parse_datetime;
use clap::Parser;

/// Evaluate the command policy once, before any handler runs.
fn enforce_policy(cli: &Cli, ctx: &Context) -> AppResult<()> {
    let key = cli.command.policy_key();

    if ctx.cfg.enforce_roles {
        let roles = ctx.actor.map(|a| ctx.cfg.roles_of(a)).unwrap_or(&[]);
        policy::authorize(key, roles)?;
    }

    if !ctx.test && policy::lookup(key).is_some_and(|p| p.cooldown) {
        let mut pool = DbPool::new(&ctx.cfg.database)?;
        policy::check_cooldown(&mut pool, key, ctx.now(), ctx.cfg.command_cooldown_ms)?;
    }

    Ok(())
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    enforce_policy(cli, ctx)?;

    match &cli.command {
        Commands::Init => commands::init::handle(cli, &ctx.config_path),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Db { .. } => commands::db::handle(&cli.command, ctx),
        Commands::Log { .. } => commands::log::handle(&cli.command, ctx),
        Commands::Clockin => commands::clockin::handle(ctx),
        Commands::Clockout => commands::clockout::handle(ctx),
        Commands::Sessions { .. } => commands::sessions::handle(&cli.command, ctx),
        Commands::Ongoing { .. } => commands::ongoing::handle(&cli.command, ctx),
        Commands::Worked { .. } => commands::worked::handle(&cli.command, ctx),
        Commands::Rmv { .. } => commands::rmv::handle(&cli.command, ctx),
        Commands::Addminutes { .. } => commands::addminutes::handle(&cli.command, ctx),
        Commands::Warn { .. } => commands::warn::handle(&cli.command, ctx),
        Commands::Remind { .. } => commands::remind::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    // config is loaded once; --db wins over the configured database
    let config_path = Config::resolve_path(cli.config.as_deref());
    let mut cfg = Config::load(&config_path)?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let clock: Box<dyn Clock> = match &cli.at {
        Some(at) => Box::new(FixedClock(parse_datetime(at)?)),
        None => Box::new(SystemClock),
    };

    let ctx = Context {
        cfg: &cfg,
        config_path,
        clock: clock.as_ref(),
        actor: cli.actor,
        test: cli.test,
    };

    dispatch(&cli, &ctx)
}
