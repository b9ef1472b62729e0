use crate::export::ReportFormat;
use crate::models::UserId;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// Attendance tracking for chat communities, backed by SQLite
#[derive(Parser, Debug)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock-in/clock-out attendance tracking with worked-time reports and warning counters",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Member issuing the command (their id on the chat platform)
    #[arg(global = true, long = "actor")]
    pub actor: Option<UserId>,

    /// Pretend the current local time is "YYYY-MM-DD HH:MM:SS"
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    /// Diagnostic log level when RUST_LOG is not set
    #[arg(global = true, long = "log-level", default_value = "warn")]
    pub log_level: String,

    /// Run in test mode (no config file update, no cooldowns)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in the acting member
    Clockin,

    /// Clock out the acting member and report the rounded time
    Clockout,

    /// List a member's sessions for a date (1-based indexes, as used by `rmv`)
    Sessions {
        /// Member id
        user: UserId,

        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Show ongoing sessions, or stop a member's ongoing session
    Ongoing {
        /// Member id (default: everybody)
        user: Option<UserId>,

        #[arg(long = "stop", requires = "user", help = "Stop and remove the member's clock-in")]
        stop: bool,
    },

    /// Worked time for all members or one member on a date
    Worked {
        /// Member id (default: whole roster)
        user: Option<UserId>,

        #[arg(long = "date", help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Remove a member's session by index
    Rmv {
        /// Member id
        user: UserId,

        /// Date (YYYY-MM-DD)
        date: String,

        /// 1-based index from `sessions`
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Credit minutes to a member: closes the open session or adds one from midnight
    Addminutes {
        /// Member id
        user: UserId,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Minutes (may be negative)
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },

    /// Add a warning to a member, or show/reset their count
    Warn {
        /// Member id
        user: UserId,

        #[arg(long = "reset", conflicts_with = "show", help = "Reset the warning count to zero")]
        reset: bool,

        #[arg(long = "show", help = "Show the current warning count")]
        show: bool,
    },

    /// Send the recurring reminder when it is due
    Remind {
        #[arg(long = "watch", help = "Keep running and send each reminder on time")]
        watch: bool,
    },
}

impl Commands {
    /// Key into the command policy table.
    pub fn policy_key(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Config { .. } => "config",
            Commands::Db { .. } => "db",
            Commands::Log { .. } => "log",
            Commands::Clockin => "clockin",
            Commands::Clockout => "clockout",
            Commands::Sessions { .. } => "sessions",
            Commands::Ongoing { stop: true, .. } => "ongoing.stop",
            Commands::Ongoing { .. } => "ongoing",
            Commands::Worked { .. } => "worked",
            Commands::Rmv { .. } => "rmv",
            Commands::Addminutes { .. } => "addminutes",
            Commands::Warn { .. } => "warn",
            Commands::Remind { .. } => "remind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::lookup;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_values_parse() {
        let cli = Cli::try_parse_from(["rattendance", "addminutes", "5", "2025-01-01", "-30"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Addminutes { minutes: -30, .. }));

        let cli = Cli::try_parse_from(["rattendance", "rmv", "5", "2025-01-01", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Rmv { index: -1, .. }));
    }

    #[test]
    fn stop_maps_to_its_own_policy() {
        let cli = Cli::try_parse_from(["rattendance", "ongoing", "5", "--stop"]).unwrap();
        assert_eq!(cli.command.policy_key(), "ongoing.stop");
        assert!(Cli::try_parse_from(["rattendance", "ongoing", "--stop"]).is_err());
    }

    #[test]
    fn every_command_has_a_policy() {
        for args in [
            vec!["rattendance", "init"],
            vec!["rattendance", "clockin"],
            vec!["rattendance", "clockout"],
            vec!["rattendance", "sessions", "1"],
            vec!["rattendance", "ongoing"],
            vec!["rattendance", "worked"],
            vec!["rattendance", "rmv", "1", "2025-01-01", "1"],
            vec!["rattendance", "addminutes", "1", "2025-01-01", "5"],
            vec!["rattendance", "warn", "1"],
            vec!["rattendance", "remind"],
            vec!["rattendance", "db", "--info"],
            vec!["rattendance", "log", "--print"],
            vec!["rattendance", "config", "--print"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(lookup(cli.command.policy_key()).is_some());
        }
    }
}
