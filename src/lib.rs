//! buildlist: fetch a list and print it
//!
//! This crate asks a list source for its data once, prints the result as
//! indented JSON on standard output, or reports the failure on standard
//! error.

pub mod errors;
pub mod formatter;
pub mod pipeline;
pub mod sources;

// Ré-exporter les types principaux pour faciliter l'utilisation
pub use errors::{PipelineError, Result, SourceError};
pub use formatter::{JsonFormatter, FAILURE_PREFIX};
pub use pipeline::{Outcome, Pipeline};
pub use sources::{FileSource, HttpSource, ListSource, Source, StaticSource, StdinSource};
