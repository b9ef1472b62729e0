pub mod addminutes;
pub mod clockin;
pub mod clockout;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod ongoing;
pub mod remind;
pub mod rmv;
pub mod sessions;
pub mod warn;
pub mod worked;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::utils::clock::Clock;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Everything a command handler needs besides its own arguments.
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub config_path: PathBuf,
    pub clock: &'a dyn Clock,
    pub actor: Option<UserId>,
    pub test: bool,
}

impl Context<'_> {
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// The member issuing the command; required by self-service commands.
    pub fn actor(&self) -> AppResult<UserId> {
        self.actor
            .ok_or_else(|| AppError::InvalidUser("missing --actor <ID>".into()))
    }

    pub fn open_pool(&self) -> AppResult<DbPool> {
        DbPool::new(&self.cfg.database)
    }
}
