//! Storage layer for habit-diary.
//!
//! This module provides `SQLite`-based key-value persistence for the diary
//! document.

mod database;
mod migrations;

pub use database::Database;
