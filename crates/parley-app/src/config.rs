use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "authDatabase.db";
const DEFAULT_LOG_FILTER: &str = "parley_app=info,parley_api=info,parley_db=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Read `PARLEY_DB_PATH` and `RUST_LOG` from the process environment.
    /// Call after `dotenvy::dotenv()` so a local `.env` is honoured.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = get("PARLEY_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let log_filter = get("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Self {
            db_path: PathBuf::from(db_path),
            log_filter,
        }
    }
}
