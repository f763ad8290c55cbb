// Error kinds for the minify pipeline. Each variant is produced at the
// step that failed; the orchestrator layers one line of step context on
// top with `anyhow::Context`. Messages stay constant and leave the cause to
// `source()`, so `{:#}` prints every cause once.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias used by the library modules.
pub type MiniJsResult<T> = Result<T, MiniJsError>;

#[derive(Debug, Error)]
pub enum MiniJsError {
    /// No input file was given on the command line.
    #[error("must specify file")]
    MissingInput,
    /// The path could not be made absolute.
    #[error("invalid file")]
    InvalidPath {
        path: PathBuf,
        source: io::Error,
    },
    #[error("file does not exist: {}", path.display())]
    NotFound { path: PathBuf },
    /// Stat failed for a reason other than a missing file (permissions, ...).
    #[error("error accessing file")]
    Inaccessible {
        path: PathBuf,
        source: io::Error,
    },
    #[error("{} is a directory, not a file", path.display())]
    NotAFile { path: PathBuf },
    /// The interactive prompt could not be read, e.g. stdin is closed or
    /// not a terminal.
    #[error("prompt failed")]
    PromptFailed { source: io::Error },
    #[error("cannot read {}", path.display())]
    ReadInput {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to build HTTP client")]
    ClientBuild { source: reqwest::Error },
    #[error("request failed")]
    RequestFailed { source: reqwest::Error },
    #[error("bad status: {status}")]
    BadStatus { status: StatusCode },
    #[error("read failed")]
    ReadFailed { source: reqwest::Error },
    #[error("cannot write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: io::Error,
    },
}
