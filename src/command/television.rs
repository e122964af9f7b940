//! Television commands

use super::Command;
use crate::device::Television;
use std::sync::Arc;

#[derive(Debug)]
pub struct TelevisionOnCommand {
    tv: Arc<Television>,
}

impl TelevisionOnCommand {
    pub fn new(tv: Arc<Television>) -> Self {
        Self { tv }
    }
}

impl Command for TelevisionOnCommand {
    fn execute(&self) {
        self.tv.on();
    }

    fn undo(&self) {
        self.tv.off();
    }

    fn name(&self) -> &'static str {
        "TelevisionOnCommand"
    }
}

#[derive(Debug)]
pub struct TelevisionOffCommand {
    tv: Arc<Television>,
}

impl TelevisionOffCommand {
    pub fn new(tv: Arc<Television>) -> Self {
        Self { tv }
    }
}

impl Command for TelevisionOffCommand {
    fn execute(&self) {
        self.tv.off();
    }

    fn undo(&self) {
        self.tv.on();
    }

    fn name(&self) -> &'static str {
        "TelevisionOffCommand"
    }
}
