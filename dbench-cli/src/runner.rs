use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::db::{reset_tables, Database};
use crate::error::BenchError;
use crate::report::BenchReport;
use crate::timer::time_phase;
use crate::workload::WorkloadGenerator;

/// Sequences a full benchmark run: reset, the six phases, reset, report.
pub struct BenchmarkRunner {
    db: Database,
}

impl BenchmarkRunner {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Run with a process-entropy RNG.
    pub fn run(&self, iterations: u32) -> Result<BenchReport, BenchError> {
        self.run_with_rng(iterations, StdRng::from_entropy())
    }

    /// Run with a fixed seed so the sampled id sequence is reproducible.
    pub fn run_seeded(&self, iterations: u32, seed: u64) -> Result<BenchReport, BenchError> {
        self.run_with_rng(iterations, StdRng::seed_from_u64(seed))
    }

    /// The phase order is part of the contract: later phases read the rows
    /// earlier phases wrote (joins draw against the write phase's posts), so
    /// reordering changes what each phase measures.
    pub fn run_with_rng<R: Rng>(
        &self,
        iterations: u32,
        rng: R,
    ) -> Result<BenchReport, BenchError> {
        let conn = self.db.pool.get()?;
        reset_tables(&conn)?;

        tracing::info!("Running database benchmark with {iterations} iterations...");
        let mut workload = WorkloadGenerator::new(&conn, rng);

        let ((), write_read_ms) =
            time_phase("Write/Read operations", || workload.write_read(iterations))?;
        let ((), joins_ms) = time_phase("JOIN queries", || workload.joins(iterations))?;
        let ((), many_to_many_ms) = time_phase("Many-to-Many Relationships", || {
            workload.many_to_many(iterations)
        })?;
        let ((), relationships_ms) = time_phase("Eager-loaded Relationships", || {
            workload.relationships(iterations)
        })?;
        let ((), aggregations_ms) =
            time_phase("Aggregations", || workload.aggregations(iterations))?;
        let ((), pagination_ms) =
            time_phase("Pagination", || workload.pagination(iterations))?;

        reset_tables(&conn)?;

        Ok(BenchReport {
            iterations,
            write_read_ms,
            joins_ms,
            many_to_many_ms,
            relationships_ms,
            aggregations_ms,
            pagination_ms,
        })
    }
}
