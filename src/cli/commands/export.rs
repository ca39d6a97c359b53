//! Export command implementation.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::cli::args::OutputFormat;
use crate::core::KeyValueStore;
use crate::diary::DiaryStore;
use crate::error::DiaryError;
use crate::features::export::ExportDocument;
use crate::output::to_json;

/// Execute export command
///
/// With `to_stdout` the document itself is the output. Otherwise it is
/// written to `file`, or to `default_file`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn export<S: KeyValueStore>(
    store: &DiaryStore<S>,
    file: Option<PathBuf>,
    to_stdout: bool,
    default_file: &Path,
    format: OutputFormat,
) -> Result<String, DiaryError> {
    let document = ExportDocument::new(store.program(), store.data());

    if to_stdout {
        return document.to_json_pretty();
    }

    let path = file.unwrap_or_else(|| default_file.to_path_buf());
    document.write_to(&path)?;
    info!(path = %path.display(), days = store.data().days.len(), "diary exported");

    match format {
        OutputFormat::Json => to_json(&json!({
            "path": path,
            "days": store.data().days.len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} days to {}",
            "Exported".green().bold(),
            store.data().days.len(),
            path.display()
        )),
    }
}
