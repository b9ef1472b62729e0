//! Declarative command policy: which roles may run a command and whether it
//! shares a cooldown bucket. Evaluated once by the dispatcher, before any
//! attendance logic runs.

use crate::db::cooldowns::{last_used, touch};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

pub struct CommandPolicy {
    pub command: &'static str,
    /// Any one of these roles grants access; empty means everyone.
    pub roles: &'static [Role],
    pub cooldown: bool,
}

const fn rule(command: &'static str, roles: &'static [Role], cooldown: bool) -> CommandPolicy {
    CommandPolicy {
        command,
        roles,
        cooldown,
    }
}

pub const POLICY: &[CommandPolicy] = &[
    rule("init", &[], false),
    rule("config", &[], false),
    rule("db", &[Role::Hr], false),
    rule("log", &[Role::Hr], false),
    rule("clockin", &[Role::Staff], true),
    rule("clockout", &[Role::Staff], true),
    rule("sessions", &[Role::Hr], false),
    rule("worked", &[Role::Hr], false),
    rule("ongoing", &[Role::Hr, Role::Supervisor], false),
    rule("ongoing.stop", &[Role::Hr], false),
    rule("rmv", &[Role::Hr], true),
    rule("addminutes", &[Role::Hr], false),
    rule("warn", &[Role::Hr], false),
    rule("remind", &[], false),
];

pub fn lookup(command: &str) -> Option<&'static CommandPolicy> {
    POLICY.iter().find(|p| p.command == command)
}

/// Unknown commands are denied.
pub fn authorize(command: &str, roles: &[Role]) -> AppResult<()> {
    let policy = lookup(command).ok_or_else(|| AppError::PermissionDenied(command.to_string()))?;

    if policy.roles.is_empty() || policy.roles.iter().any(|r| roles.contains(r)) {
        Ok(())
    } else {
        let required: Vec<&str> = policy.roles.iter().map(Role::as_str).collect();
        debug!(command, required = %required.join("|"), "permission denied");
        Err(AppError::PermissionDenied(command.to_string()))
    }
}

/// Global per-command rate limit. A permitted call records its use.
pub fn check_cooldown(
    pool: &mut DbPool,
    command: &str,
    now: NaiveDateTime,
    cooldown_ms: u64,
) -> AppResult<()> {
    if !lookup(command).is_some_and(|p| p.cooldown) || cooldown_ms == 0 {
        return Ok(());
    }

    let window = TimeDelta::milliseconds(cooldown_ms as i64);
    if let Some(last) = last_used(&pool.conn, command)? {
        let ready_at = last + window;
        if now < ready_at && now >= last {
            let retry_after = (ready_at - now).num_milliseconds() as f64 / 1000.0;
            return Err(AppError::OnCooldown {
                command: command.to_string(),
                retry_after,
            });
        }
    }

    touch(&pool.conn, command, &now)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_datetime;

    #[test]
    fn staff_can_clock_but_not_administer() {
        assert!(authorize("clockin", &[Role::Staff]).is_ok());
        assert!(authorize("clockout", &[Role::Staff]).is_ok());
        assert!(matches!(
            authorize("rmv", &[Role::Staff]),
            Err(AppError::PermissionDenied(_))
        ));
    }

    #[test]
    fn supervisors_can_view_but_not_stop() {
        assert!(authorize("ongoing", &[Role::Supervisor]).is_ok());
        assert!(authorize("ongoing.stop", &[Role::Supervisor]).is_err());
        assert!(authorize("ongoing.stop", &[Role::Hr]).is_ok());
    }

    #[test]
    fn open_and_unknown_commands() {
        assert!(authorize("remind", &[]).is_ok());
        assert!(authorize("selfdestruct", &[Role::Hr]).is_err());
    }

    #[test]
    fn every_policy_entry_is_unique() {
        for p in POLICY {
            assert_eq!(POLICY.iter().filter(|q| q.command == p.command).count(), 1);
        }
    }

    #[test]
    fn cooldown_blocks_inside_the_window() {
        let mut pool = DbPool::in_memory().unwrap();
        let t0 = parse_datetime("2025-05-05 10:00:00").unwrap();

        check_cooldown(&mut pool, "clockin", t0, 1500).unwrap();

        let err = check_cooldown(&mut pool, "clockin", t0 + TimeDelta::milliseconds(500), 1500)
            .unwrap_err();
        match err {
            AppError::OnCooldown { retry_after, .. } => assert!((retry_after - 1.0).abs() < 1e-9),
            other => panic!("unexpected error: {other}"),
        }

        // other buckets are unaffected
        check_cooldown(&mut pool, "clockout", t0, 1500).unwrap();
        check_cooldown(&mut pool, "clockin", t0 + TimeDelta::milliseconds(1500), 1500).unwrap();
    }

    #[test]
    fn commands_without_cooldown_are_never_limited() {
        let mut pool = DbPool::in_memory().unwrap();
        let t0 = parse_datetime("2025-05-05 10:00:00").unwrap();
        check_cooldown(&mut pool, "worked", t0, 1500).unwrap();
        check_cooldown(&mut pool, "worked", t0, 1500).unwrap();
    }
}
