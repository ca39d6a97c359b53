//! Feature implementations for habit-diary.
//!
//! This module contains:
//! - Statistics (completion rate, streak, weekly checkpoints)
//! - Export (JSON document and printable summary)

pub mod export;
pub mod stats;
