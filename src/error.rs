//! Error types for the benchmark harness.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can abort a harness run.
///
/// Correctness failures and skipped combinations are not errors: they are
/// recorded as statuses in the run log and the run continues. The only
/// fatal condition is being unable to write the output artifacts.
#[derive(Debug)]
pub enum HarnessError {
    /// Creating the output directory or writing an output file failed.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
        }
    }
}
