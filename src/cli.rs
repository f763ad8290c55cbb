// Command line surface. The input file is optional at the parser level so a
// missing argument goes through the same error path (and exit code) as any
// other failure.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::api::DEFAULT_ENDPOINT;
use crate::app::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "minijs", version, about = "Minify a JavaScript file with a remote minifier")]
pub struct Cli {
    /// JavaScript file to minify.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file name, placed next to the input file.
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Minification endpoint receiving the `input` form field.
    #[arg(long, env = "MINIJS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Do not print the minified source.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            input: self.file.clone(),
            output: self.output.clone(),
            quiet: self.quiet,
        }
    }

    /// Default log filter for the requested verbosity; `RUST_LOG` wins.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
