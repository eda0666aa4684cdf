// src/export/mod.rs

pub mod csv;
pub(crate) mod fs_utils;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use chrono::{DateTime, Local, Utc};
use std::path::Path;

/// MIME type handed to whatever ends up saving the export.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// `dogcare_records_<YYYY-MM-DD>.csv`, dated with the local calendar day of `now_ms`.
pub fn export_file_name(now_ms: i64) -> String {
    let day = DateTime::<Utc>::from_timestamp_millis(now_ms)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    format!("dogcare_records_{day}.csv")
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
