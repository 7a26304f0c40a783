//! List sources
//!
//! A source is whatever produces the list the pipeline prints. The
//! pipeline only cares that it eventually yields a serializable value
//! or an error it can display.

pub mod file;
pub mod http;

use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::SourceError;

pub use file::{FileSource, StdinSource};
pub use http::HttpSource;

/// Trait implemented by everything that can build a list
pub trait ListSource {
    /// The list produced on success
    type Output: Serialize;

    /// The failure produced when no list can be built
    type Error: Display;

    /// Build the list
    fn build_list(&self) -> impl Future<Output = Result<Self::Output, Self::Error>>;
}

/// Source returning a value it already holds
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    list: T,
}

impl<T: Serialize + Clone> StaticSource<T> {
    /// Create a source that always returns `list`
    pub fn new(list: T) -> Self {
        StaticSource { list }
    }
}

impl<T: Serialize + Clone> ListSource for StaticSource<T> {
    type Output = T;
    type Error = Infallible;

    async fn build_list(&self) -> Result<T, Infallible> {
        Ok(self.list.clone())
    }
}

/// Sources selectable at runtime
#[derive(Debug, Clone)]
pub enum Source {
    /// JSON fetched over HTTP(S)
    Http(HttpSource),
    /// JSON document on disk
    File(FileSource),
    /// JSON document piped on standard input
    Stdin(StdinSource),
}

impl Source {
    /// Short description used in log messages
    pub fn describe(&self) -> String {
        match self {
            Source::Http(source) => format!("url {}", source.url()),
            Source::File(source) => format!("file {}", source.path().display()),
            Source::Stdin(_) => "standard input".to_string(),
        }
    }
}

impl FromStr for Source {
    type Err = SourceError;

    /// Parse a source argument: an `http(s)://` URL, `-` for standard
    /// input, or a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SourceError::InvalidSpec("empty source".to_string()));
        }

        if s == "-" {
            Ok(Source::Stdin(StdinSource::new()))
        } else if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Source::Http(HttpSource::new(s)))
        } else {
            Ok(Source::File(FileSource::new(PathBuf::from(s))))
        }
    }
}

impl ListSource for Source {
    type Output = Value;
    type Error = SourceError;

    async fn build_list(&self) -> Result<Value, SourceError> {
        match self {
            Source::Http(source) => source.build_list().await,
            Source::File(source) => source.build_list().await,
            Source::Stdin(source) => source.build_list().await,
        }
    }
}
