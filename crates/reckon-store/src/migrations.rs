//! Embedded schema migrations
//!
//! Ordered list of (id, sql) pairs applied once each, tracked in the
//! `schema_migrations` table. Re-running against an up-to-date database is
//! a no-op.

use rusqlite::Connection;

use crate::errors::{from_rusqlite, migration_error, Result};

/// Embedded migrations in application order
const MIGRATIONS: &[(&str, &str)] = &[(
    "0001_create_history",
    "CREATE TABLE IF NOT EXISTS history (
        position INTEGER PRIMARY KEY,
        equation TEXT NOT NULL,
        recorded_at INTEGER NOT NULL
    )",
)];

/// Apply all pending migrations
pub fn run(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            id TEXT PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    for (id, sql) in MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE id = ?1)",
                [id],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        if already_applied {
            continue;
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute_batch(sql)
            .map_err(|e| migration_error(id, &e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_migrations (id, applied_at) VALUES (?1, ?2)",
            rusqlite::params![id, chrono::Utc::now().timestamp()],
        )
        .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(migration = id, "applied schema migration");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_run_is_idempotent() {
        let mut conn = db::open_in_memory().unwrap();
        run(&mut conn).unwrap();
        run(&mut conn).unwrap();

        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
    }
}
