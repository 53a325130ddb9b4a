//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Tree(_) => crate::exitcode::DATAERR,
            CliError::Settings(SettingsError::Load(_)) => crate::exitcode::CONFIG,
            CliError::Settings(SettingsError::Render(_)) => crate::exitcode::SOFTWARE,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tree;

    #[test]
    fn test_exit_codes() {
        let mut tree = Tree::new();
        let idx = tree.insert(());

        assert_eq!(
            CliError::from(TreeError::NodeNotFound(idx)).exit_code(),
            crate::exitcode::DATAERR
        );
        assert_eq!(
            CliError::Usage("no command".into()).exit_code(),
            crate::exitcode::USAGE
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::from(io).exit_code(), crate::exitcode::IOERR);
    }
}
