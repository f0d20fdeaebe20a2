/// SQL schema for the benchmark tables.
/// Creates all tables with proper constraints, foreign keys, and indexes.
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS dbench_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Posts table
CREATE TABLE IF NOT EXISTS dbench_posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    body TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES dbench_users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_posts_user_id ON dbench_posts(user_id);

-- Categories table
CREATE TABLE IF NOT EXISTS dbench_categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Tags table
CREATE TABLE IF NOT EXISTS dbench_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Comments table
CREATE TABLE IF NOT EXISTS dbench_comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    comment TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES dbench_posts(id) ON DELETE CASCADE,
    FOREIGN KEY (user_id) REFERENCES dbench_users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_comments_post_id ON dbench_comments(post_id);
CREATE INDEX IF NOT EXISTS idx_dbench_comments_user_id ON dbench_comments(user_id);

-- Likes table
CREATE TABLE IF NOT EXISTS dbench_likes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES dbench_posts(id) ON DELETE CASCADE,
    FOREIGN KEY (user_id) REFERENCES dbench_users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_likes_post_id ON dbench_likes(post_id);
CREATE INDEX IF NOT EXISTS idx_dbench_likes_user_id ON dbench_likes(user_id);

-- Media table
CREATE TABLE IF NOT EXISTS dbench_media (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL,
    file_path TEXT NOT NULL,
    media_type TEXT NOT NULL CHECK(media_type IN ('image', 'video', 'document')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (post_id) REFERENCES dbench_posts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_media_post_id ON dbench_media(post_id);

-- Post-category junction table
CREATE TABLE IF NOT EXISTS dbench_post_category (
    post_id INTEGER NOT NULL,
    category_id INTEGER NOT NULL,
    PRIMARY KEY (post_id, category_id),
    FOREIGN KEY (post_id) REFERENCES dbench_posts(id) ON DELETE CASCADE,
    FOREIGN KEY (category_id) REFERENCES dbench_categories(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_post_category_category_id ON dbench_post_category(category_id);

-- Post-tag junction table
CREATE TABLE IF NOT EXISTS dbench_post_tag (
    post_id INTEGER NOT NULL,
    tag_id INTEGER NOT NULL,
    PRIMARY KEY (post_id, tag_id),
    FOREIGN KEY (post_id) REFERENCES dbench_posts(id) ON DELETE CASCADE,
    FOREIGN KEY (tag_id) REFERENCES dbench_tags(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_dbench_post_tag_tag_id ON dbench_post_tag(tag_id);

-- Audit table
CREATE TABLE IF NOT EXISTS dbench_audits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    operation TEXT NOT NULL CHECK(operation IN ('INSERT', 'UPDATE', 'DELETE')),
    user_id INTEGER,
    operation_time TEXT NOT NULL DEFAULT (datetime('now')),
    details TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES dbench_users(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_dbench_audits_user_id ON dbench_audits(user_id);
"#;

/// Benchmark tables in child-first order, safe to clear sequentially.
pub const BENCH_TABLES: [&str; 10] = [
    "dbench_post_tag",
    "dbench_post_category",
    "dbench_media",
    "dbench_likes",
    "dbench_comments",
    "dbench_audits",
    "dbench_posts",
    "dbench_tags",
    "dbench_categories",
    "dbench_users",
];
