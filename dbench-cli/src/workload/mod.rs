mod junctions;
mod reads;
mod writes;

use rand::Rng;
use rusqlite::Connection;

/// Fixed bcrypt digest of "password". Hashing cost is not part of what the
/// write phase measures, so every user row reuses it.
const PASSWORD_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewdBPj4J8fGHxR2u";

/// Issues the per-phase workloads against a single connection.
///
/// The RNG is injected so callers (and tests) can fix the sampled id
/// sequence; it only needs to be uniform, not cryptographic.
pub struct WorkloadGenerator<'c, R: Rng> {
    conn: &'c Connection,
    rng: R,
}

impl<'c, R: Rng> WorkloadGenerator<'c, R> {
    pub fn new(conn: &'c Connection, rng: R) -> Self {
        Self { conn, rng }
    }

    /// Uniform draw from ids collected earlier in the same phase.
    fn pick(&mut self, ids: &[i64]) -> i64 {
        ids[self.rng.gen_range(0..ids.len())]
    }

    /// Uniform draw from the closed interval [1, upper].
    fn draw_id(&mut self, upper: u32) -> i64 {
        self.rng.gen_range(1..=i64::from(upper))
    }
}

/// Highest page number the pagination phase may request: floor(n / 10),
/// clamped so page 1 stays a valid request when n < 10.
pub(crate) fn page_upper_bound(n: u32) -> u32 {
    (n / 10).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{reset_tables, Database, DbConnection};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn bench_conn() -> (Database, DbConnection) {
        let db = Database::in_memory().expect("in-memory database");
        db.initialize().expect("schema");
        let conn = db.connection().expect("connection");
        (db, conn)
    }

    fn count(conn: &Connection, sql: &str) -> i64 {
        conn.query_row(sql, [], |row| row.get(0)).expect("count query")
    }

    #[test]
    fn write_read_respects_referential_integrity() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(1));
        workload.write_read(30).unwrap();

        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_users"), 30);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_posts"), 30);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_categories"), 30);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_tags"), 30);

        let orphans = count(
            &conn,
            "SELECT COUNT(*) FROM dbench_posts
             WHERE user_id NOT IN (SELECT id FROM dbench_users)",
        );
        assert_eq!(orphans, 0);
    }

    #[test]
    fn junction_pairs_stay_unique_across_both_strategies() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(2));
        workload.write_read(200).unwrap();
        workload.many_to_many(200).unwrap();

        for table in ["dbench_post_category", "dbench_post_tag"] {
            let dupes = count(
                &conn,
                &format!(
                    "SELECT COUNT(*) FROM (
                         SELECT * FROM {table}
                         GROUP BY 1, 2 HAVING COUNT(*) > 1
                     )"
                ),
            );
            assert_eq!(dupes, 0, "duplicate pairs in {table}");
        }
    }

    #[test]
    fn join_phase_on_empty_tables_is_benign() {
        let (_db, conn) = bench_conn();
        reset_tables(&conn).unwrap();

        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(3));
        workload.joins(25).expect("zero-result joins must not error");
    }

    #[test]
    fn relationship_phase_tolerates_missing_users() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(4));
        workload.relationships(10).expect("missing users are not an error");
    }

    #[test]
    fn many_to_many_skips_pairs_that_already_exist() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(5));
        // With a single id in play every draw lands on (1, 1), so the second
        // pass is guaranteed to find its pairs already present.
        workload.write_read(1).unwrap();
        workload.many_to_many(1).unwrap();

        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_post_category"), 1);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_post_tag"), 1);

        workload
            .many_to_many(1)
            .expect("existing pairs are skipped, not an error");
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_post_category"), 1);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_post_tag"), 1);
    }

    #[test]
    fn seeded_write_read_samples_identical_junction_pairs() {
        let pairs_for_seed = |seed: u64| -> Vec<(i64, i64)> {
            let (_db, conn) = bench_conn();
            let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(seed));
            workload.write_read(50).unwrap();

            let mut stmt = conn
                .prepare("SELECT post_id, category_id FROM dbench_post_category ORDER BY post_id, category_id")
                .unwrap();
            stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        };

        assert_eq!(pairs_for_seed(42), pairs_for_seed(42));
    }

    #[test]
    fn zero_iterations_do_no_work() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(6));
        workload.write_read(0).unwrap();
        workload.joins(0).unwrap();
        workload.many_to_many(0).unwrap();
        workload.relationships(0).unwrap();
        workload.aggregations(0).unwrap();
        workload.pagination(0).unwrap();

        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_users"), 0);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM dbench_posts"), 0);
    }

    #[test]
    fn pagination_clamps_small_runs_to_first_page() {
        let (_db, conn) = bench_conn();
        let mut workload = WorkloadGenerator::new(&conn, StdRng::seed_from_u64(7));
        workload.write_read(5).unwrap();
        workload.pagination(5).expect("page must clamp to 1, not 0");
    }

    proptest! {
        #[test]
        fn page_upper_bound_is_always_a_valid_page(n in 0u32..10_000) {
            let bound = page_upper_bound(n);
            prop_assert!(bound >= 1);
            if n >= 10 {
                prop_assert_eq!(bound, n / 10);
            } else {
                prop_assert_eq!(bound, 1);
            }
        }
    }
}
