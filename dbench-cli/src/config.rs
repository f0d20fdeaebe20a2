use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Benchmark {
    pub iterations: u32,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub benchmark: Benchmark,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Optional dbench.toml, checked in the current directory and in the
        // crate directory for development checkouts.
        let config_file_name = "dbench.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        let dev_path = PathBuf::from("dbench-cli").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        builder = builder
            .set_default("database.path", "dbench.db")?
            .set_default("benchmark.iterations", 100)?;

        // Environment variables take priority over the file.
        if let Ok(db_path) = std::env::var("DBENCH_DATABASE_PATH") {
            builder = builder.set_override("database.path", db_path)?;
        }
        if let Ok(iterations) = std::env::var("DBENCH_ITERATIONS") {
            builder = builder.set_override("benchmark.iterations", iterations)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
