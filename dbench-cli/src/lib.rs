pub mod config;
pub mod db;
pub mod error;
pub mod report;
pub mod runner;
pub mod timer;
pub mod workload;

pub use error::BenchError;
pub use report::BenchReport;
pub use runner::BenchmarkRunner;
