//! Air conditioner commands

use super::Command;
use crate::device::AirConditioner;
use std::sync::Arc;

#[derive(Debug)]
pub struct AirConditionerOnCommand {
    ac: Arc<AirConditioner>,
}

impl AirConditionerOnCommand {
    pub fn new(ac: Arc<AirConditioner>) -> Self {
        Self { ac }
    }
}

impl Command for AirConditionerOnCommand {
    fn execute(&self) {
        self.ac.on();
    }

    fn undo(&self) {
        self.ac.off();
    }

    fn name(&self) -> &'static str {
        "AirConditionerOnCommand"
    }
}

#[derive(Debug)]
pub struct AirConditionerOffCommand {
    ac: Arc<AirConditioner>,
}

impl AirConditionerOffCommand {
    pub fn new(ac: Arc<AirConditioner>) -> Self {
        Self { ac }
    }
}

impl Command for AirConditionerOffCommand {
    fn execute(&self) {
        self.ac.off();
    }

    fn undo(&self) {
        self.ac.on();
    }

    fn name(&self) -> &'static str {
        "AirConditionerOffCommand"
    }
}

/// Put the air conditioner into energy-saving mode.
///
/// Undo switches the unit off rather than restoring whatever mode it had
/// before: the adapter keeps no record of the previous mode.
#[derive(Debug)]
pub struct AirConditionerEcoModeCommand {
    ac: Arc<AirConditioner>,
}

impl AirConditionerEcoModeCommand {
    pub fn new(ac: Arc<AirConditioner>) -> Self {
        Self { ac }
    }
}

impl Command for AirConditionerEcoModeCommand {
    fn execute(&self) {
        self.ac.set_eco_mode();
    }

    fn undo(&self) {
        self.ac.off();
    }

    fn name(&self) -> &'static str {
        "AirConditionerEcoModeCommand"
    }
}
