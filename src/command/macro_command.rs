//! Macro command: an ordered group of commands

use super::{Command, CommandRef};
use tracing::info;

/// Runs its members in order and undoes them in reverse order.
///
/// Members are fixed at construction. A macro may contain other macros; each
/// level applies the same ordering, so undoing a nested macro unwinds the
/// innermost effects last-applied-first.
#[derive(Debug)]
pub struct MacroCommand {
    label: String,
    commands: Vec<CommandRef>,
}

impl MacroCommand {
    pub fn new(label: impl Into<String>, commands: Vec<CommandRef>) -> Self {
        Self {
            label: label.into(),
            commands,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for MacroCommand {
    fn execute(&self) {
        info!(macro_label = %self.label, members = self.commands.len(), "Macro started");
        for command in &self.commands {
            command.execute();
        }
        info!(macro_label = %self.label, "Macro finished");
    }

    fn undo(&self) {
        info!(macro_label = %self.label, members = self.commands.len(), "Macro undo started");
        for command in self.commands.iter().rev() {
            command.undo();
        }
        info!(macro_label = %self.label, "Macro undo finished");
    }

    fn name(&self) -> &'static str {
        "MacroCommand"
    }
}
