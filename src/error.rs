use thiserror::Error;

/// Unified error type for docs-channel operations
#[derive(Error, Debug)]
pub enum DocsChannelError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Publish command failed with exit code {code}: {command}")]
    Publish { command: String, code: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in docs-channel
pub type Result<T> = std::result::Result<T, DocsChannelError>;

impl DocsChannelError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsChannelError::Config(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        DocsChannelError::Repository(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// A failed publish command hands its own exit code through; anything
    /// else that prevents a decision exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocsChannelError::Publish { code, .. } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocsChannelError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DocsChannelError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_publish_error_display() {
        let err = DocsChannelError::Publish {
            command: "task docs:publish".to_string(),
            code: 3,
        };
        assert_eq!(
            err.to_string(),
            "Publish command failed with exit code 3: task docs:publish"
        );
    }

    #[test]
    fn test_publish_exit_code_passes_through() {
        let err = DocsChannelError::Publish {
            command: "false".to_string(),
            code: 42,
        };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let errors = vec![
            DocsChannelError::config("bad toml"),
            DocsChannelError::repository("not a repository"),
            DocsChannelError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "sh not found",
            )),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "unexpected exit code for: {}", err);
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DocsChannelError::config("x"), "Configuration error"),
            (DocsChannelError::repository("x"), "Repository error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
