pub mod connection;
pub mod reset;
pub mod schema;

pub use connection::{Database, DbConnection, DbPool};
pub use reset::reset_tables;
