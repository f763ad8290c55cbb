// Library root
// ------------
// The binary (`main.rs`) parses arguments and hands off to `app::run`.
//
// Module responsibilities:
// - `paths`: resolves the input file and derives the output file name.
// - `collision`: asks the user what to do when the output already exists.
// - `api`: the blocking HTTP client for the remote minifier.
// - `ui`: console prompts and the progress spinner.
// - `app`: runs the steps in order and writes the result.
pub mod api;
pub mod app;
pub mod cli;
pub mod collision;
pub mod error;
pub mod paths;
pub mod ui;

pub use error::{MiniJsError, MiniJsResult};
