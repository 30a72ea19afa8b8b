//! Screen-level operations. Each function validates its input the way the
//! corresponding screen does, then runs the store call on the blocking pool
//! so the caller's task never waits on SQLite directly.

pub mod auth;
pub mod comments;
pub mod contacts;
pub mod directory;
pub mod error;
pub mod messages;

use std::sync::Arc;

use parley_db::{Database, StoreError};
use tracing::error;

pub use error::{ApiError, Result};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

pub fn app_state(db: Database) -> AppState {
    Arc::new(AppStateInner { db })
}

/// Run a store operation off the async runtime.
pub(crate) async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T>
where
    F: FnOnce(&Database) -> parley_db::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::StoreUnavailable(e.to_string())
        })?
        .map_err(|e| {
            if let StoreError::StoreUnavailable(msg) = &e {
                error!("Store error: {}", msg);
            }
            ApiError::from(e)
        })
}

/// Required text fields must contain something other than whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
