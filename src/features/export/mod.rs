//! Export of the diary.
//!
//! Two one-way artifacts:
//! - A pretty-printed JSON document with the program and all day records
//! - A plain-text printable progress summary

pub mod document;
pub mod printable;

pub use document::{ExportConfig, ExportDocument, DEFAULT_EXPORT_FILE};
pub use printable::render_printable_summary;
