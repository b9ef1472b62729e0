use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::role::Role;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry (used by `config --check`).
pub const CONFIG_KEYS: &[&str] = &[
    "database",
    "max_warnings",
    "strict_open_session",
    "reminder_interval_minutes",
    "reminder_message",
    "command_cooldown_ms",
    "enforce_roles",
    "members",
];

/// A roster entry: who the member is and what they may do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_max_warnings")]
    pub max_warnings: i64,
    /// Reject a clock-in when the member has an open session on *any* date,
    /// not only on the current one.
    #[serde(default)]
    pub strict_open_session: bool,
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval_minutes: i64,
    #[serde(default = "default_reminder_message")]
    pub reminder_message: String,
    #[serde(default = "default_cooldown_ms")]
    pub command_cooldown_ms: u64,
    #[serde(default)]
    pub enforce_roles: bool,
    #[serde(default)]
    pub members: Vec<Member>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_max_warnings() -> i64 {
    5
}
fn default_reminder_interval() -> i64 {
    120
}
fn default_reminder_message() -> String {
    "Reminder: don't forget to clock in when you start and clock out when you stop.".to_string()
}
fn default_cooldown_ms() -> u64 {
    1500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            max_warnings: default_max_warnings(),
            strict_open_session: false,
            reminder_interval_minutes: default_reminder_interval(),
            reminder_message: default_reminder_message(),
            command_cooldown_ms: default_cooldown_ms(),
            enforce_roles: false,
            members: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rattendance")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Resolve the config file to use: explicit override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database location.
    ///
    /// With `is_test` the configuration file is left untouched.
    pub fn init_all(path: &Path, custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut cfg = Config::load(path)?;

        if let Some(name) = custom_db {
            let p = expand_tilde(name);
            cfg.database = if p.is_absolute() {
                p
            } else {
                Self::config_dir().join(p)
            }
            .to_string_lossy()
            .to_string();
        }

        if !is_test {
            cfg.save(path)?;
            println!("✅ Config file: {:?}", path);
        }

        if let Some(dir) = Path::new(&cfg.database).parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        println!("✅ Database:    {:?}", cfg.database);
        Ok(cfg)
    }

    pub fn member(&self, user: UserId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == user)
    }

    /// Roles of `user`; members missing from the roster hold none.
    pub fn roles_of(&self, user: UserId) -> &[Role] {
        self.member(user).map(|m| m.roles.as_slice()).unwrap_or(&[])
    }

    pub fn roster(&self) -> Vec<UserId> {
        self.members.iter().map(|m| m.id).collect()
    }

    /// Keys of [`CONFIG_KEYS`] absent from the raw file content.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .collect())
    }
}
