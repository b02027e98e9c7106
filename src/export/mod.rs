mod fs_utils;
mod json_csv;
mod model;

pub use fs_utils::ensure_writable;
pub use json_csv::{write_csv, write_json};
pub use model::{DayExport, EventExport, EventRecord, WeekExport, build_week_export};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
