//! Light commands

use super::Command;
use crate::device::Light;
use std::sync::Arc;

/// Turn a light on; undo turns it off
#[derive(Debug)]
pub struct LightOnCommand {
    light: Arc<Light>,
}

impl LightOnCommand {
    pub fn new(light: Arc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.on();
    }

    fn undo(&self) {
        self.light.off();
    }

    fn name(&self) -> &'static str {
        "LightOnCommand"
    }
}

/// Turn a light off; undo turns it back on
#[derive(Debug)]
pub struct LightOffCommand {
    light: Arc<Light>,
}

impl LightOffCommand {
    pub fn new(light: Arc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.off();
    }

    fn undo(&self) {
        self.light.on();
    }

    fn name(&self) -> &'static str {
        "LightOffCommand"
    }
}
