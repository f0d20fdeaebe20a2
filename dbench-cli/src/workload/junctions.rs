use rand::Rng;
use rusqlite::params;

use super::WorkloadGenerator;
use crate::error::BenchError;

impl<R: Rng> WorkloadGenerator<'_, R> {
    /// Many-to-many phase: N iterations, each attempting one post-category
    /// and one post-tag junction insert with ids drawn from [1, N].
    ///
    /// Existence is checked in the database per attempt, unlike the write
    /// phase's in-memory set; this phase measures check-then-insert round
    /// trips. An existing pair is skipped silently.
    pub fn many_to_many(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;

        let mut category_pair_exists = conn.prepare(
            "SELECT EXISTS(
                 SELECT 1 FROM dbench_post_category
                 WHERE post_id = ?1 AND category_id = ?2
             )",
        )?;
        let mut insert_category_pair = conn.prepare(
            "INSERT INTO dbench_post_category (post_id, category_id) VALUES (?1, ?2)",
        )?;
        let mut tag_pair_exists = conn.prepare(
            "SELECT EXISTS(
                 SELECT 1 FROM dbench_post_tag
                 WHERE post_id = ?1 AND tag_id = ?2
             )",
        )?;
        let mut insert_tag_pair =
            conn.prepare("INSERT INTO dbench_post_tag (post_id, tag_id) VALUES (?1, ?2)")?;

        for _ in 0..iterations {
            let post_id = self.draw_id(iterations);
            let category_id = self.draw_id(iterations);
            let exists: i64 =
                category_pair_exists.query_row(params![post_id, category_id], |row| row.get(0))?;
            if exists == 0 {
                insert_category_pair.execute(params![post_id, category_id])?;
            }

            let post_id = self.draw_id(iterations);
            let tag_id = self.draw_id(iterations);
            let exists: i64 =
                tag_pair_exists.query_row(params![post_id, tag_id], |row| row.get(0))?;
            if exists == 0 {
                insert_tag_pair.execute(params![post_id, tag_id])?;
            }
        }

        Ok(())
    }
}
