use thiserror::Error;

/// Errors that abort a benchmark run.
///
/// Junction-insert duplicates are not represented here: both duplicate-avoidance
/// strategies check before inserting, so a duplicate pair is skipped rather than
/// surfaced. Anything that does reach this type ends the run with no report.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("state reset failed: {0}")]
    Reset(String),
}
