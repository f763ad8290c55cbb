// Orchestration of one run: resolve the input, settle the output path,
// minify and write. Every failure carries one line naming the step.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::api::Minifier;
use crate::collision::{resolve_collision, Resolution};
use crate::error::MiniJsError;
use crate::paths::{output_name, resolve_input};
use crate::ui::{self, Prompter};

/// Inputs for a single run, already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub output: Option<String>,
    /// Skip echoing the minified text.
    pub quiet: bool,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { output: PathBuf },
    /// The user cancelled at the collision prompt. Nothing was written.
    Cancelled,
}

/// Run the whole pipeline. Progress and the final report go to `out`.
pub fn run(
    opts: &RunOptions,
    prompter: &mut dyn Prompter,
    minifier: &dyn Minifier,
    out: &mut dyn Write,
) -> Result<RunOutcome> {
    let raw = opts.input.as_deref().ok_or(MiniJsError::MissingInput)?;
    let input = resolve_input(raw).context("error resolving input file")?;

    let candidate = output_name(opts.output.as_deref(), &input);
    let output = match resolve_collision(candidate, &input, prompter)
        .context("error choosing output file")?
    {
        Resolution::Resolved(path) => path,
        Resolution::Cancelled => {
            info!("cancelled by user");
            return Ok(RunOutcome::Cancelled);
        }
    };

    writeln!(out, "Processing file: {}", input.display())?;
    let contents = fs::read(&input)
        .map_err(|source| MiniJsError::ReadInput {
            path: input.clone(),
            source,
        })
        .context("error reading file")?;
    let source = String::from_utf8_lossy(&contents);

    let spinner = ui::spinner("Minifying...");
    let minified = minifier.minify(&source);
    spinner.finish_and_clear();
    let minified = minified.context("error minifying JavaScript")?;

    write_output(&output, &minified).context("error writing minified file")?;
    info!(input = %input.display(), output = %output.display(), "minified file written");

    if !opts.quiet {
        writeln!(out, "Minified output:\n{minified}")?;
    }
    writeln!(out, "Minified file created: {}", output.display())?;
    Ok(RunOutcome::Written { output })
}

/// Write the whole result in one go, truncating any existing file. New
/// files get mode 0644 on unix.
fn write_output(path: &Path, contents: &str) -> Result<(), MiniJsError> {
    let write = || -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    };
    write().map_err(|source| MiniJsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
