//! Remote control command dispatcher
//!
//! Buttons on a [`remote::RemoteControl`] are bound to [`command::Command`]s,
//! which drive the adapters in [`device`]. The remote keeps one level of
//! undo and an append-only log of every press.

pub mod command;
pub mod device;
pub mod remote;

pub use remote_shared::{LogAction, LogEntry, RemoteError, UndoState};
