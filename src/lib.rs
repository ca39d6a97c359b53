//! habit-diary - A fixed-length daily habit tracker and journal
//!
//! This crate provides the diary store, progress statistics and the
//! command-line interface built on them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod diary;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use diary::{DayRecord, DiaryStore, Program, TaskTemplate};
pub use error::DiaryError;
pub use features::stats::StatsEngine;
