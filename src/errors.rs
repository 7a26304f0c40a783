//! Error types for buildlist
//!
//! This module defines the errors raised by the bundled list sources
//! and by the pipeline itself.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while a source builds its list
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid source: {0}")]
    InvalidSpec(String),
}

/// Errors that escape the pipeline
///
/// Source failures never show up here: they are reported on the error
/// stream. Only a broken output stream is surfaced to the caller.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot read \"missing.json\": no such file");

        let err = SourceError::InvalidSpec("empty source".to_string());
        assert_eq!(err.to_string(), "invalid source: empty source");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SourceError = parse_err.into();
        assert!(err.to_string().starts_with("invalid JSON: "));
    }

    #[test]
    fn test_pipeline_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: PipelineError = io.into();
        assert_eq!(err.to_string(), "cannot write output: broken pipe");
    }
}
