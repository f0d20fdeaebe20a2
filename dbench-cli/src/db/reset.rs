use rusqlite::Connection;

use super::schema::BENCH_TABLES;
use crate::error::BenchError;

/// Suspends foreign-key enforcement for as long as it lives.
///
/// Restoration happens in `Drop`, so every exit path out of a reset — clean
/// or failed — re-enables enforcement before the connection is used again.
struct ForeignKeyGuard<'c> {
    conn: &'c Connection,
}

impl<'c> ForeignKeyGuard<'c> {
    fn disable(conn: &'c Connection) -> Result<Self, BenchError> {
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(Self { conn })
    }
}

impl Drop for ForeignKeyGuard<'_> {
    fn drop(&mut self) {
        let _ = self.conn.pragma_update(None, "foreign_keys", true);
    }
}

/// Empties every benchmark table, child-first, and resets their id sequences
/// so generated ids start again at 1.
///
/// Idempotent: clearing already-empty tables is a no-op. Any failure here is
/// fatal to the run — the caller must not proceed against a partial state.
pub fn reset_tables(conn: &Connection) -> Result<(), BenchError> {
    tracing::info!("Truncating tables...");

    let _guard = ForeignKeyGuard::disable(conn)?;

    for table in BENCH_TABLES {
        conn.execute(&format!("DELETE FROM {table}"), [])
            .map_err(|e| BenchError::Reset(format!("failed to clear {table}: {e}")))?;
    }

    // sqlite_sequence only exists after the first insert into an
    // AUTOINCREMENT table.
    let has_sequence: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence')",
        [],
        |row| row.get(0),
    )?;
    if has_sequence == 1 {
        for table in BENCH_TABLES {
            conn.execute("DELETE FROM sqlite_sequence WHERE name = ?1", [table])
                .map_err(|e| BenchError::Reset(format!("failed to reset sequence for {table}: {e}")))?;
        }
    }

    tracing::info!("Tables truncated successfully.");
    Ok(())
}
