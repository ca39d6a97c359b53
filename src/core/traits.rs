//! Shared traits.

use crate::error::DiaryError;

/// Opaque string key-value persistence.
///
/// The diary keeps its whole document under a single key. Implementations
/// must make a successful `set` durable before returning.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DiaryError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), DiaryError>;
}
