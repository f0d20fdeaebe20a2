use dbench::db::schema::BENCH_TABLES;
use dbench::db::Database;
use dbench::BenchmarkRunner;

fn assert_tables_empty(db: &Database) {
    let conn = db.connection().expect("connection");
    for table in BENCH_TABLES {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .expect("count query");
        assert_eq!(count, 0, "{table} still has rows after the run");
    }
}

#[test]
fn end_to_end_run_reports_six_phases_and_leaves_tables_empty() {
    let db = Database::in_memory().expect("in-memory database");
    db.initialize().expect("schema");

    let runner = BenchmarkRunner::new(db.clone());
    let report = runner.run(50).expect("benchmark run");

    let entries = report.entries();
    assert_eq!(entries.len(), 6);
    for (name, ms) in entries {
        assert!(ms >= 0.0, "{name} reported a negative elapsed time");
    }
    assert_tables_empty(&db);

    // A second invocation is structurally identical: same phases, fresh
    // independent timings, and the same empty baseline afterwards.
    let second = runner.run(50).expect("second benchmark run");
    let first_names: Vec<_> = report.entries().iter().map(|(n, _)| *n).collect();
    let second_names: Vec<_> = second.entries().iter().map(|(n, _)| *n).collect();
    assert_eq!(first_names, second_names);
    assert_tables_empty(&db);
}

#[test]
fn phase_timings_do_not_decrease_with_iteration_count() {
    let db = Database::in_memory().expect("in-memory database");
    db.initialize().expect("schema");
    let runner = BenchmarkRunner::new(db);

    let small = runner.run_seeded(10, 1).expect("run with n = 10");
    let medium = runner.run_seeded(100, 1).expect("run with n = 100");
    let large = runner.run_seeded(1000, 1).expect("run with n = 1000");

    // Each step does an order of magnitude more work in the write phase;
    // elapsed time cannot shrink as the iteration count grows.
    assert!(medium.write_read_ms >= small.write_read_ms);
    assert!(large.write_read_ms >= medium.write_read_ms);
    for report in [&small, &medium, &large] {
        for (name, ms) in report.entries() {
            assert!(ms >= 0.0, "{name} reported {ms}");
        }
    }
}

#[test]
fn small_iteration_count_clamps_pagination_to_page_one() {
    let db = Database::in_memory().expect("in-memory database");
    db.initialize().expect("schema");

    // floor(5 / 10) = 0 would mean page 0; the run must request page 1
    // instead and complete cleanly.
    let report = BenchmarkRunner::new(db)
        .run_seeded(5, 3)
        .expect("run with n = 5");
    assert!(report.pagination_ms >= 0.0);
}

#[test]
fn seeded_runs_complete_against_a_file_database() {
    let path = std::env::temp_dir().join("dbench_integration_test.db");
    let _ = std::fs::remove_file(&path);

    let db = Database::new(&path).expect("file database");
    db.initialize().expect("schema");

    let report = BenchmarkRunner::new(db.clone())
        .run_seeded(20, 11)
        .expect("file-backed run");
    assert_eq!(report.iterations, 20);
    assert_tables_empty(&db);

    drop(db);
    let _ = std::fs::remove_file(&path);
}
