use serde::Serialize;
use std::fmt;

/// Elapsed milliseconds per phase for one completed benchmark run.
///
/// A report only exists for a run that finished all six phases; an aborted
/// run produces an error instead, never a partial report.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub iterations: u32,
    pub write_read_ms: f64,
    pub joins_ms: f64,
    pub many_to_many_ms: f64,
    pub relationships_ms: f64,
    pub aggregations_ms: f64,
    pub pagination_ms: f64,
}

impl BenchReport {
    /// Phase timings in execution order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Write/Read operations", self.write_read_ms),
            ("JOIN queries", self.joins_ms),
            ("Many-to-Many Relationships", self.many_to_many_ms),
            ("Eager-loaded Relationships", self.relationships_ms),
            ("Aggregations", self.aggregations_ms),
            ("Pagination", self.pagination_ms),
        ]
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark Results ({} iterations):", self.iterations)?;
        for (name, ms) in self.entries() {
            writeln!(f, "{name}: {ms} ms")?;
        }
        Ok(())
    }
}
