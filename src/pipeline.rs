//! Fetch, format and print pipeline
//!
//! The pipeline asks its source for a list once, then either prints the
//! formatted list on the output stream or reports the failure on the
//! error stream. Exactly one of the two streams receives content.

use log::{debug, info};
use std::io::Write;

use crate::errors::Result;
use crate::formatter::JsonFormatter;
use crate::sources::ListSource;

/// Which branch a run took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list was written to the output stream
    Printed,
    /// A failure was written to the error stream
    Reported,
}

/// Pipeline printing the list built by a source
pub struct Pipeline<S> {
    source: S,
    formatter: JsonFormatter,
}

impl<S: ListSource> Pipeline<S> {
    /// Create a pipeline around a source
    pub fn new(source: S) -> Self {
        Pipeline {
            source,
            formatter: JsonFormatter::new(),
        }
    }

    /// Get the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run once against the process's standard output and error streams
    pub async fn run(&self) -> Result<Outcome> {
        self.run_with(&mut std::io::stdout(), &mut std::io::stderr())
            .await
    }

    /// Run once, writing the list to `out` or the failure to `err`.
    ///
    /// Source and serialization failures are reported on `err` and yield
    /// [`Outcome::Reported`]. Only a failing writer produces an `Err`.
    pub async fn run_with<O, E>(&self, out: &mut O, err: &mut E) -> Result<Outcome>
    where
        O: Write,
        E: Write,
    {
        debug!("Building list");

        let text = match self.source.build_list().await {
            Ok(list) => self.formatter.format_list(&list).map_err(|e| {
                debug!("List could not be serialized: {}", e);
                self.formatter.format_failure(&e)
            }),
            Err(e) => Err(self.formatter.format_failure(&e)),
        };

        // Nothing has been written yet: pick a single stream
        match text {
            Ok(text) => {
                writeln!(out, "{}", text)?;
                out.flush()?;
                info!("List printed ({} bytes)", text.len());
                Ok(Outcome::Printed)
            }
            Err(line) => {
                writeln!(err, "{}", line)?;
                err.flush()?;
                info!("List could not be built");
                Ok(Outcome::Reported)
            }
        }
    }
}
