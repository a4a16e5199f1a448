//! History repository
//!
//! Persists the calculator's equation history. The calculator engine
//! saves the full updated list after each successful calculation and
//! after clearing, so `save` is a replace-all write inside one
//! transaction; `load` returns the list most-recent-first, matching the
//! in-memory ordering.

use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result};

/// SQLite repository for the equation history
pub struct HistoryRepo;

impl HistoryRepo {
    /// Load the full history, most recent first
    pub fn load(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare("SELECT equation FROM history ORDER BY position ASC")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(from_rusqlite)?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row.map_err(from_rusqlite)?);
        }
        Ok(history)
    }

    /// Replace the stored history with the given list
    ///
    /// Position 0 is the most recent entry. Clearing history is a save of
    /// the empty list.
    pub fn save(conn: &mut Connection, history: &[String]) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute("DELETE FROM history", [])
            .map_err(from_rusqlite)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO history (position, equation, recorded_at)
                     VALUES (?1, ?2, ?3)",
                )
                .map_err(from_rusqlite)?;
            for (position, equation) in history.iter().enumerate() {
                stmt.execute(rusqlite::params![position as i64, equation, now])
                    .map_err(from_rusqlite)?;
            }
        }
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(entries = history.len(), "history saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrations};

    fn new_conn() -> Connection {
        let mut conn = db::open_in_memory().unwrap();
        migrations::run(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_load_empty_database() {
        let conn = new_conn();
        assert!(HistoryRepo::load(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let mut conn = new_conn();
        let history = vec![
            "2 + 2 = 4".to_string(),
            "1 + 1 = 2".to_string(),
        ];
        HistoryRepo::save(&mut conn, &history).unwrap();
        assert_eq!(HistoryRepo::load(&conn).unwrap(), history);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let mut conn = new_conn();
        HistoryRepo::save(&mut conn, &["1 + 1 = 2".to_string()]).unwrap();
        HistoryRepo::save(&mut conn, &[]).unwrap();
        assert!(HistoryRepo::load(&conn).unwrap().is_empty());
    }
}
