use chrono::{DateTime, Utc};
use rand::Rng;
use rusqlite::{params, OptionalExtension, Row};

use dbench_types::{Post, User};

use super::{page_upper_bound, WorkloadGenerator};
use crate::error::BenchError;

impl<R: Rng> WorkloadGenerator<'_, R> {
    /// Join phase: N independent user-post joins filtered by a post id drawn
    /// from [1, N], at most one row each. Against tables the earlier phases
    /// have not filled, the reads simply match nothing.
    pub fn joins(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;
        let mut join_query = conn.prepare(
            "SELECT dbench_users.name, dbench_posts.title
             FROM dbench_users
             JOIN dbench_posts ON dbench_users.id = dbench_posts.user_id
             WHERE dbench_posts.id = ?1",
        )?;

        for _ in 0..iterations {
            let post_id = self.draw_id(iterations);
            let _row: Option<(String, String)> = join_query
                .query_row(params![post_id], |row| Ok((row.get(0)?, row.get(1)?)))
                .optional()?;
        }

        Ok(())
    }

    /// Relationship phase: eager-load a user with all of its posts.
    ///
    /// Two queries per iteration — the parent by id, then every child in one
    /// batched select — never one query per post. A missing user id ends the
    /// iteration without further work.
    pub fn relationships(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;
        let mut user_by_id = conn.prepare(
            "SELECT id, name, email, password, created_at, updated_at
             FROM dbench_users WHERE id = ?1",
        )?;
        let mut posts_by_user = conn.prepare(
            "SELECT id, user_id, title, body, created_at, updated_at
             FROM dbench_posts WHERE user_id = ?1",
        )?;

        for _ in 0..iterations {
            let user_id = self.draw_id(iterations);
            let user = user_by_id
                .query_row(params![user_id], map_user)
                .optional()?;
            if let Some(user) = user {
                let posts: Vec<Post> = posts_by_user
                    .query_map(params![user.id], map_post)?
                    .collect::<Result<_, _>>()?;
                let _ = posts.len();
            }
        }

        Ok(())
    }

    /// Aggregation phase: N counts of posts per user id drawn from [1, N].
    pub fn aggregations(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;
        let mut count_posts =
            conn.prepare("SELECT COUNT(*) FROM dbench_posts WHERE user_id = ?1")?;

        for _ in 0..iterations {
            let user_id = self.draw_id(iterations);
            let _count: i64 = count_posts.query_row(params![user_id], |row| row.get(0))?;
        }

        Ok(())
    }

    /// Pagination phase: N fetches of a 10-user page at a page number drawn
    /// from [1, floor(N/10)], clamped to page 1 for small N. Each iteration
    /// also runs the total count a paginator reports alongside the page.
    pub fn pagination(&mut self, iterations: u32) -> Result<(), BenchError> {
        let conn = self.conn;
        let mut count_users = conn.prepare("SELECT COUNT(*) FROM dbench_users")?;
        let mut user_page = conn.prepare(
            "SELECT id, name, email FROM dbench_users ORDER BY id LIMIT 10 OFFSET ?1",
        )?;
        let upper = page_upper_bound(iterations);

        for _ in 0..iterations {
            let page = i64::from(self.rng.gen_range(1..=upper));
            let _total: i64 = count_users.query_row([], |row| row.get(0))?;
            let _rows: Vec<(i64, String, String)> = user_page
                .query_map(params![(page - 1) * 10], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
                })?
                .collect::<Result<_, _>>()?;
        }

        Ok(())
    }
}

fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        created_at: row.get::<_, String>(4)?.parse::<DateTime<Utc>>().unwrap(),
        updated_at: row.get::<_, String>(5)?.parse::<DateTime<Utc>>().unwrap(),
    })
}

fn map_post(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        created_at: row.get::<_, String>(4)?.parse::<DateTime<Utc>>().unwrap(),
        updated_at: row.get::<_, String>(5)?.parse::<DateTime<Utc>>().unwrap(),
    })
}
