use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            let yaml =
                serde_yaml::to_string(ctx.cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *check {
            if !ctx.config_path.exists() {
                info(format!(
                    "No configuration file at {}; defaults are in use.",
                    ctx.config_path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&ctx.config_path)?;
            let missing = Config::missing_keys(&content)?;

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing fields (defaults applied): {}",
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
