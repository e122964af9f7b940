//! Append-only command log
//!
//! Every button press on the remote appends exactly one entry:
//! ```text
//! <timestamp ms>: <Execute|Undo> -> <command type>
//! ```
//!
//! Entries are never pruned or rewritten.

use std::fmt;

use crate::now_ms;

/// What the remote did with a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Execute,
    Undo,
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogAction::Execute => write!(f, "Execute"),
            LogAction::Undo => write!(f, "Undo"),
        }
    }
}

/// A single log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    /// When the action happened (ms since Unix epoch)
    pub at_ms: u64,
    pub action: LogAction,
    /// Type name of the command the action was applied to
    pub command: &'static str,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.at_ms, self.action, self.command)
    }
}

/// Ordered, append-only sequence of log entries
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<LogEntry>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time
    pub fn append(&mut self, action: LogAction, command: &'static str) -> LogEntry {
        let entry = LogEntry {
            at_ms: now_ms(),
            action,
            command,
        };
        self.entries.push(entry);
        entry
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for CommandLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Command log ---")?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "-------------------")
    }
}
