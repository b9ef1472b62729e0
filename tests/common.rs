#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config file path for a test; written when `content` is given, removed otherwise
/// (a missing file means defaults).
pub fn test_config(name: &str, content: Option<&str>) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    if let Some(c) = content {
        fs::write(&p, c).expect("write test config");
    }
    p
}

/// Command bound to a test DB and config, in test mode, at a fixed time.
pub fn rat_at(db: &str, cfg: &str, at: &str) -> Command {
    let mut cmd = rat();
    cmd.args(["--db", db, "--config", cfg, "--test", "--at", at]);
    cmd
}

/// Clock `actor` in at `cin` and out at `cout` (both "YYYY-MM-DD HH:MM:SS").
pub fn work(db: &str, cfg: &str, actor: &str, cin: &str, cout: &str) {
    rat_at(db, cfg, cin)
        .args(["--actor", actor, "clockin"])
        .assert()
        .success();
    rat_at(db, cfg, cout)
        .args(["--actor", actor, "clockout"])
        .assert()
        .success();
}
