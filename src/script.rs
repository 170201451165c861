// File: ./src/script.rs
//! Line-oriented batch driver for the assistant screen.
//!
//! Each line is one command; blank lines and `#` comments are skipped.
//! Leading whitespace before the keyword is ignored. Text arguments are taken
//! verbatim after the single separating space or tab so that whitespace-only
//! input reaches the screen unchanged.
use crate::model::{EntryList, ListKind};
use crate::notify::{NotificationSink, emit};
use crate::screen::ListScreen;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the buffer, then submit.
    Add(ListKind, String),
    SetBuffer(ListKind, String),
    Submit(ListKind),
    Remove(ListKind, usize),
    Automate,
    Suggest,
    List,
    Dump,
}

fn kind_for(keyword: &str) -> Option<ListKind> {
    match keyword {
        "task" => Some(ListKind::Tasks),
        "appt" => Some(ListKind::Appointments),
        _ => None,
    }
}

/// Parses one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once([' ', '\t']) {
        Some((k, r)) => (k, Some(r)),
        None => (line, None),
    };
    let text = rest.unwrap_or("").to_string();

    let cmd = match keyword {
        "automate" => Command::Automate,
        "suggest" => Command::Suggest,
        "list" => Command::List,
        "dump" => Command::Dump,
        k => {
            if let Some(kind) = kind_for(k) {
                Command::Add(kind, text)
            } else if let Some(kind) = k.strip_suffix("-buffer").and_then(kind_for) {
                Command::SetBuffer(kind, text)
            } else if let Some(kind) = k.strip_prefix("submit-").and_then(kind_for) {
                Command::Submit(kind)
            } else if let Some(kind) = k.strip_prefix("rm-").and_then(kind_for) {
                let raw = text.trim();
                if raw.is_empty() {
                    bail!("'{}' needs an index", k);
                }
                let index: usize = raw
                    .parse()
                    .with_context(|| format!("'{}' is not a valid index", raw))?;
                Command::Remove(kind, index)
            } else {
                bail!("unknown command '{}'", k);
            }
        }
    };
    Ok(Some(cmd))
}

/// Applies a command to the screen, sending any notice to `sink` and any
/// listing to `out`.
pub fn apply(
    screen: &mut ListScreen,
    cmd: Command,
    sink: &mut dyn NotificationSink,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        Command::Add(kind, text) => {
            screen.section_mut(kind).set_buffer(text);
            let notice = screen.section_mut(kind).submit();
            sink.notify(&notice);
        }
        Command::SetBuffer(kind, text) => screen.section_mut(kind).set_buffer(text),
        Command::Submit(kind) => {
            let notice = screen.section_mut(kind).submit();
            sink.notify(&notice);
        }
        Command::Remove(kind, index) => {
            let notice = screen.section_mut(kind).remove_at(index);
            emit(sink, notice);
        }
        Command::Automate => sink.notify(&screen.trigger_workflow_automation()),
        Command::Suggest => sink.notify(&screen.trigger_reminder_suggestion()),
        Command::List => {
            write_list(out, ListKind::Tasks.title(), screen.tasks())?;
            write_list(out, ListKind::Appointments.title(), screen.appointments())?;
        }
        Command::Dump => {
            let json = serde_json::to_string_pretty(&screen.snapshot())?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

fn write_list(out: &mut dyn Write, title: &str, list: &EntryList) -> Result<()> {
    writeln!(out, "{} ({})", title, list.len())?;
    for (i, entry) in list.iter().enumerate() {
        writeln!(out, "  {}. {}", i, entry.text)?;
    }
    Ok(())
}

/// Prints notices to the output stream as `[severity] message`.
pub struct PrintSink<'a> {
    out: &'a mut dyn Write,
    /// Notices that could not be written.
    pub dropped: usize,
}

impl<'a> PrintSink<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, dropped: 0 }
    }
}

impl NotificationSink for PrintSink<'_> {
    fn notify(&mut self, notice: &crate::model::Notice) {
        if let Err(e) = writeln!(self.out, "{}", notice) {
            self.dropped += 1;
            log::warn!("Dropping notice '{}': {}", notice.message, e);
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub executed: usize,
    pub failed_lines: Vec<usize>,
}

impl RunReport {
    pub fn is_ok(&self) -> bool {
        self.failed_lines.is_empty()
    }
}

/// Runs every line of `input` against `screen`. Parse errors and lines that
/// are not valid UTF-8 are reported on `err` and skipped.
pub fn run<R: BufRead>(
    screen: &mut ListScreen,
    mut input: R,
    out: &mut dyn Write,
    err: &mut dyn Write,
    sink: &mut dyn NotificationSink,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut raw = Vec::new();
    let mut line_no = 0;
    loop {
        raw.clear();
        let read = input
            .read_until(b'\n', &mut raw)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let parsed = std::str::from_utf8(&raw)
            .context("line is not valid UTF-8")
            .and_then(parse_line);
        match parsed {
            Ok(Some(cmd)) => {
                log::debug!("batch line {}: {:?}", line_no, cmd);
                apply(screen, cmd, sink, out)?;
                report.executed += 1;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("batch line {}: {:#}", line_no, e);
                writeln!(err, "error: line {}: {:#}", line_no, e)?;
                report.failed_lines.push(line_no);
            }
        }
    }
    Ok(report)
}
