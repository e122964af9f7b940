//! Null command for unbound slots

use super::Command;
use tracing::info;

/// Command that does nothing except report that nothing is bound
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self) {
        info!("No command is bound to this button");
    }

    fn undo(&self) {
        info!("No command is bound to this button");
    }

    fn name(&self) -> &'static str {
        "NoCommand"
    }
}
