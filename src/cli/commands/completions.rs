//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::DiaryError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, DiaryError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habit-diary", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| DiaryError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
