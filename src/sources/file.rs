//! File and standard input list sources

use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use super::ListSource;
use crate::errors::SourceError;

/// Source reading the list from a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListSource for FileSource {
    type Output = Value;
    type Error = SourceError;

    async fn build_list(&self) -> Result<Value, SourceError> {
        debug!("Reading {:?}", self.path);

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Source reading the list from standard input until EOF
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        StdinSource
    }
}

impl ListSource for StdinSource {
    type Output = Value;
    type Error = SourceError;

    async fn build_list(&self) -> Result<Value, SourceError> {
        debug!("Reading standard input");

        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(SourceError::Stdin)?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
