//! Commands bound to remote control buttons
//!
//! This module provides:
//! - The [`Command`] capability every button press operates on
//! - Concrete commands for each device adapter
//! - [`NoCommand`], the no-op filling unbound slots
//! - [`MacroCommand`], an ordered group of commands undone in reverse

mod air_conditioner;
mod light;
mod macro_command;
mod noop;
mod television;

use std::fmt::Debug;
use std::sync::Arc;

pub use air_conditioner::{
    AirConditionerEcoModeCommand, AirConditionerOffCommand, AirConditionerOnCommand,
};
pub use light::{LightOffCommand, LightOnCommand};
pub use macro_command::MacroCommand;
pub use noop::NoCommand;
pub use television::{TelevisionOffCommand, TelevisionOnCommand};

/// An executable and reversible unit of work.
///
/// Commands are immutable once built; the device they drive is fixed at
/// construction. Both operations are total.
pub trait Command: Debug + Send + Sync {
    /// Perform the action
    fn execute(&self);

    /// Perform the logical inverse of [`Command::execute`]
    fn undo(&self);

    /// Type name recorded in the command log
    fn name(&self) -> &'static str;
}

/// Shared handle to a command, so one command can sit in a slot and a macro
pub type CommandRef = Arc<dyn Command>;
