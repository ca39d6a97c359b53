//! Core abstractions for habit-diary.
//!
//! This module provides calendar arithmetic and the persistence trait
//! shared by the diary and its storage backends.

pub mod calendar;
mod traits;

#[cfg(test)]
pub use traits::MockKeyValueStore;
pub use traits::KeyValueStore;
