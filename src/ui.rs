// UI layer: console prompts with `dialoguer` and a spinner with `indicatif`.
// The rest of the crate talks to the console only through `Prompter`, so
// tests can feed scripted answers instead of a real terminal.

use std::io::{self, IsTerminal};
use std::time::Duration;

use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

/// Capability for the two kinds of interactive questions the tool asks.
pub trait Prompter {
    /// Show `options` under `label` and return the index the user picked.
    fn choose(&mut self, label: &str, options: &[&str]) -> io::Result<usize>;

    /// Ask for a line of free text.
    fn read_line(&mut self, label: &str) -> io::Result<String>;
}

/// Keyboard-driven prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn choose(&mut self, label: &str, options: &[&str]) -> io::Result<usize> {
        require_terminal(attached_to_terminal())?;
        Select::new()
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact()
    }

    fn read_line(&mut self, label: &str) -> io::Result<String> {
        require_terminal(attached_to_terminal())?;
        Input::<String>::new().with_prompt(label).interact_text()
    }
}

/// dialoguer draws on stderr and reads keys from stdin. Without a terminal
/// on both it never sees a keypress and keeps asking.
fn attached_to_terminal() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

fn require_terminal(attached: bool) -> io::Result<()> {
    if attached {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::NotConnected, "not a terminal"))
    }
}

/// Spinner shown on stderr while waiting on the network. Hidden
/// automatically when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
