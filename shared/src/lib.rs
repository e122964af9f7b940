//! Remote Control Shared Types
//!
//! This crate provides the vocabulary shared by the remote control invoker
//! and anything that drives it: the slot error type, the append-only command
//! log and the single-level undo register.

pub mod journal;
pub mod state_machine;

use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub use journal::{CommandLog, LogAction, LogEntry};
pub use state_machine::{UndoRegister, UndoState};

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Session parameters for the remote
pub mod remote {
    /// Number of slots a remote gets when none is configured
    pub const DEFAULT_SLOT_COUNT: usize = 7;

    /// Pending requests a remote service accepts before callers wait
    pub const REQUEST_QUEUE_DEPTH: usize = 32;
}

/// Errors reported by the remote control
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Slot {slot} does not exist (remote has {slot_count} slots)")]
    InvalidSlotIndex { slot: isize, slot_count: usize },
}

/// Resolve a caller-supplied slot into a table index.
///
/// Negative slots and slots at or past `slot_count` are rejected.
pub fn slot_index(slot: isize, slot_count: usize) -> Result<usize, RemoteError> {
    usize::try_from(slot)
        .ok()
        .filter(|&index| index < slot_count)
        .ok_or(RemoteError::InvalidSlotIndex { slot, slot_count })
}
