// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help.
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tui,
    Batch,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    pub root: Option<PathBuf>,
}

/// Parses arguments, excluding the binary name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mode = Mode::Tui;
    let mut root = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "-h" | "--help" | "help" => mode = Mode::Help,
            "batch" => {
                if mode != Mode::Help {
                    mode = Mode::Batch;
                }
            }
            "-r" | "--root" => match iter.next() {
                Some(path) => root = Some(PathBuf::from(path.as_ref())),
                None => bail!("--root needs a path"),
            },
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(CliArgs { mode, root })
}

pub fn print_help(binary_name: &str) {
    println!(
        "vpa v{} - Virtual Personal Assistant: to-do list, appointments and reminders",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]          Start interactive TUI", binary_name);
    println!("    {} batch [--root <path>]    Read commands from stdin", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("BATCH COMMANDS (one per line, '#' starts a comment, text follows one space or tab):");
    println!("    task <text>           Add a task");
    println!("    appt <text>           Schedule an appointment");
    println!("    task-buffer <text>    Set the pending task text without submitting");
    println!("    appt-buffer <text>    Set the pending appointment text without submitting");
    println!("    submit-task           Submit the pending task text");
    println!("    submit-appt           Submit the pending appointment text");
    println!("    rm-task <n>           Remove task number n (0-based)");
    println!("    rm-appt <n>           Cancel appointment number n (0-based)");
    println!("    automate              Trigger workflow automation");
    println!("    suggest               Suggest a reminder");
    println!("    list                  Print both lists");
    println!("    dump                  Print the full state as JSON");
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    println!("EXAMPLES:");
    println!("    printf 'task Buy milk\\nappt Dentist 3pm\\nlist\\n' | {} batch", binary_name);
    println!();
    println!("License:    GPL-3.0");
}
