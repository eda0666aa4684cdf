// src/export/logic.rs

use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{EXPORT_MIME_TYPE, export_file_name, notify_export_success};
use crate::store::KeyValueStore;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the export goes.
#[derive(Debug, Clone, Default)]
pub struct ExportTarget {
    /// Explicit output file; wins over `dir`.
    pub file: Option<PathBuf>,
    /// Directory for the dated default file name; current dir when `None`.
    pub dir: Option<PathBuf>,
}

impl ExportTarget {
    pub fn resolve(&self, now_ms: i64) -> PathBuf {
        match (&self.file, &self.dir) {
            (Some(file), _) => file.clone(),
            (None, Some(dir)) => dir.join(export_file_name(now_ms)),
            (None, None) => PathBuf::from(export_file_name(now_ms)),
        }
    }
}

/// High-level export: build the CSV text and "download" it to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the export for `tracker` and return the path written.
    pub fn export<S: KeyValueStore>(
        tracker: &Tracker<S>,
        target: &ExportTarget,
        now_ms: i64,
        date_format: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = target.resolve(now_ms);
        let content = tracker.build_export_with(date_format)?;

        Self::save(&path, &content, force)?;
        Ok(path)
    }

    /// The download step: plain UTF-8 text to disk.
    pub fn save(path: &Path, content: &str, force: bool) -> AppResult<()> {
        info(format!(
            "Exporting to CSV ({EXPORT_MIME_TYPE}): {}",
            path.display()
        ));

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;

        notify_export_success("CSV", path);
        Ok(())
    }
}
