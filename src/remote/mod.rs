//! The remote control invoker
//!
//! This module handles:
//! - Binding commands to button slots
//! - Dispatching on/off presses to the bound commands
//! - Single-level undo of the most recent press
//! - Recording every press in an append-only log
//! - Serializing access from several callers through a service task

mod control;
mod service;

pub use control::{RemoteConfig, RemoteControl, SlotBinding};
pub use service::{RemoteHandle, RemoteService};
