use std::collections::HashSet;

use chrono::Utc;
use rand::Rng;
use rusqlite::{params, OptionalExtension};

use super::{WorkloadGenerator, PASSWORD_HASH};
use crate::error::BenchError;

impl<R: Rng> WorkloadGenerator<'_, R> {
    /// Write/read phase: N users, then N posts and N categories, then N tags,
    /// then N junction-insert attempts, then N point reads joining each post
    /// to its owner.
    ///
    /// Every post references a user created earlier in this phase, so the
    /// foreign key can never trip. Junction deduplication uses a transient
    /// in-memory set rather than a database lookup; the contrasting
    /// database-checked strategy lives in the many-to-many phase.
    pub fn write_read(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;

        let mut user_ids = Vec::with_capacity(iterations as usize);
        {
            let mut insert_user = conn.prepare(
                "INSERT INTO dbench_users (name, email, password, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for i in 0..iterations {
                let ts = Utc::now().to_rfc3339();
                insert_user.execute(params![
                    format!("User {i}"),
                    format!("user{i}@example.com"),
                    PASSWORD_HASH,
                    ts,
                    ts
                ])?;
                user_ids.push(conn.last_insert_rowid());
            }
        }

        let mut post_ids = Vec::with_capacity(iterations as usize);
        let mut category_ids = Vec::with_capacity(iterations as usize);
        {
            let mut insert_post = conn.prepare(
                "INSERT INTO dbench_posts (user_id, title, body, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            let mut insert_category = conn.prepare(
                "INSERT INTO dbench_categories (name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for i in 0..iterations {
                let ts = Utc::now().to_rfc3339();
                let user_id = self.pick(&user_ids);
                insert_post.execute(params![
                    user_id,
                    format!("Post Title {i}"),
                    format!("This is the body of post {i}"),
                    ts,
                    ts
                ])?;
                post_ids.push(conn.last_insert_rowid());

                insert_category.execute(params![
                    format!("Category {i}"),
                    format!("Description of Category {i}"),
                    ts,
                    ts
                ])?;
                category_ids.push(conn.last_insert_rowid());
            }
        }

        {
            let mut insert_tag = conn.prepare(
                "INSERT INTO dbench_tags (name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for i in 0..iterations {
                let ts = Utc::now().to_rfc3339();
                insert_tag.execute(params![
                    format!("Tag {i}"),
                    format!("Description of Tag {i}"),
                    ts,
                    ts
                ])?;
            }
        }

        // Junction inserts deduplicated by a set scoped to this invocation.
        let mut seen_pairs: HashSet<(i64, i64)> = HashSet::new();
        {
            let mut insert_pair = conn.prepare(
                "INSERT INTO dbench_post_category (post_id, category_id) VALUES (?1, ?2)",
            )?;
            for _ in 0..iterations {
                let post_id = self.pick(&post_ids);
                let category_id = self.pick(&category_ids);
                if seen_pairs.insert((post_id, category_id)) {
                    insert_pair.execute(params![post_id, category_id])?;
                }
            }
        }

        // Read-after-write: point reads joining each post to its owner.
        {
            let mut read_post = conn.prepare(
                "SELECT dbench_posts.id, dbench_posts.title, dbench_users.name
                 FROM dbench_posts
                 JOIN dbench_users ON dbench_posts.user_id = dbench_users.id
                 WHERE dbench_posts.id = ?1",
            )?;
            for _ in 0..iterations {
                let post_id = self.pick(&post_ids);
                let _row = read_post
                    .query_row(params![post_id], |row| {
                        Ok((
                            row.get::<_, i64>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                        ))
                    })
                    .optional()?;
            }
        }

        Ok(())
    }
}
