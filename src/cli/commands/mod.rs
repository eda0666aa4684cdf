pub mod backup;
pub mod config;
pub mod export;
pub mod history;
pub mod incident;
pub mod init;
pub mod log;
pub mod status;
pub mod watch;
pub mod water;

use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::store::SqliteStore;

/// Open the configured database behind a tracker.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<Tracker<SqliteStore>> {
    Ok(Tracker::new(SqliteStore::open(&cfg.database)?))
}

/// Audit a tracker mutation in the same database.
pub(crate) fn audit(tracker: &Tracker<SqliteStore>, operation: &str, target: &str, message: &str) {
    crate::db::log::ttlog_or_warn(&tracker.store().pool().conn, operation, target, message);
}
