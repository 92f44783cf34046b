use thiserror::Error;

/// Custom error types for elasticbook
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElasticbookError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ElasticbookError {
    fn from(err: std::io::Error) -> Self {
        ElasticbookError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
