// Collision handling for the output path: when the candidate already
// exists, keep asking the user until they override it, pick a free name or
// cancel. Nothing on disk is touched here.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{MiniJsError, MiniJsResult};
use crate::paths::output_name;
use crate::ui::Prompter;

pub const COLLISION_LABEL: &str = "Minified file already exists";
pub const RENAME_LABEL: &str = "Output file shall be named";

/// Options shown at the collision prompt, in display order.
pub const COLLISION_OPTIONS: [&str; 3] = [
    "Override output file",
    "Rename output file",
    "Cancel operation",
];

/// What the user picked at the collision prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionChoice {
    Override,
    Rename,
    Cancel,
}

impl CollisionChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Override),
            1 => Some(Self::Rename),
            2 => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Final state of the collision loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write here. The path may exist if the user chose to override it.
    Resolved(PathBuf),
    /// The user backed out; no output must be written.
    Cancelled,
}

/// Settle the output path starting from `candidate`.
///
/// Renamed answers go through [`output_name`] with `input` so they land next
/// to the input file, then get checked again. The loop has no iteration
/// bound; it ends on a free name, an override or a cancel.
pub fn resolve_collision(
    mut candidate: PathBuf,
    input: &Path,
    prompter: &mut dyn Prompter,
) -> MiniJsResult<Resolution> {
    loop {
        if !candidate.exists() {
            debug!(output = %candidate.display(), "output path is free");
            return Ok(Resolution::Resolved(candidate));
        }

        info!(output = %candidate.display(), "output path already exists");
        let index = prompter
            .choose(COLLISION_LABEL, &COLLISION_OPTIONS)
            .map_err(|source| MiniJsError::PromptFailed { source })?;
        let choice = CollisionChoice::from_index(index).ok_or_else(|| MiniJsError::PromptFailed {
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("no option at index {index}"),
            ),
        })?;

        match choice {
            CollisionChoice::Override => {
                debug!(output = %candidate.display(), "overriding existing output");
                return Ok(Resolution::Resolved(candidate));
            }
            CollisionChoice::Cancel => return Ok(Resolution::Cancelled),
            CollisionChoice::Rename => {
                let name = prompter
                    .read_line(RENAME_LABEL)
                    .map_err(|source| MiniJsError::PromptFailed { source })?;
                candidate = output_name(Some(name.trim()), input);
                debug!(output = %candidate.display(), "renamed output");
            }
        }
    }
}
