use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

const CLOCK_TIMES_INDEX_MIGRATION: &str = "20250301_0001_clock_times_user_date_index";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `clock_times` table. Column layout matches the databases
/// written by the earlier chat bot so they can be opened in place; insertion
/// order is the implicit rowid.
fn create_clock_times_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_times (
            user_id   INTEGER,
            date      TEXT,
            clock_in  TEXT,
            clock_out TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_clock_times_user_date ON clock_times(user_id, date);
        "#,
    )?;
    Ok(())
}

/// Tables with an independent lifecycle from sessions.
fn ensure_support_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS infractions (
            user_id INTEGER PRIMARY KEY,
            count   INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS reminder (
            id        INTEGER PRIMARY KEY CHECK (id = 1),
            last_sent TEXT
        );

        CREATE TABLE IF NOT EXISTS cooldowns (
            command   TEXT PRIMARY KEY,
            last_used TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Legacy `clock_times` tables carry no index; every lookup is by (user_id, date).
fn migrate_add_clock_times_index(conn: &Connection) -> Result<()> {
    if migration_applied(conn, CLOCK_TIMES_INDEX_MIGRATION)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_clock_times_user_date ON clock_times(user_id, date);",
    )?;

    mark_applied(
        conn,
        CLOCK_TIMES_INDEX_MIGRATION,
        "Added (user_id, date) index to clock_times",
    )?;

    info!(
        migration = CLOCK_TIMES_INDEX_MIGRATION,
        "indexed clock_times by user and date"
    );

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a database is opened; each step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "clock_times")? {
        migrate_add_clock_times_index(conn)?;
    } else {
        create_clock_times_table(conn)?;
        mark_applied(
            conn,
            CLOCK_TIMES_INDEX_MIGRATION,
            "Created clock_times with (user_id, date) index",
        )?;
        info!("Created clock_times table");
    }

    ensure_support_tables(conn)?;
    debug!("Schema up to date");
    Ok(())
}
