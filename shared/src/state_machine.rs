//! Undo Register State Machine
//!
//! The remote remembers exactly one command for undo. The register moves
//! between two states:
//!
//! ```text
//!   Empty --arm--> Armed --arm--> Armed
//!     ^              |
//!     +---consume----+      (consume on Empty stays Empty)
//! ```
//!
//! It always holds a value: while `Empty` that value is the null command the
//! register was created with.

/// States of the undo register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoState {
    /// Holding the null command; nothing to undo
    Empty,
    /// Holding the most recently executed command
    Armed,
}

/// Single-level undo register
#[derive(Debug, Clone)]
pub struct UndoRegister<T> {
    null: T,
    held: T,
    state: UndoState,
}

impl<T: Clone> UndoRegister<T> {
    /// Create an empty register that falls back to `null`
    pub fn new(null: T) -> Self {
        Self {
            held: null.clone(),
            null,
            state: UndoState::Empty,
        }
    }

    /// Get current state
    pub fn state(&self) -> UndoState {
        self.state
    }

    /// The value that the next `consume` hands out
    pub fn held(&self) -> &T {
        &self.held
    }

    /// Remember `value` as the most recent action.
    ///
    /// The register is `Armed` afterwards even if `value` is the null value.
    pub fn arm(&mut self, value: T) {
        self.held = value;
        self.state = UndoState::Armed;
    }

    /// Take the held value and reset to the null value.
    pub fn consume(&mut self) -> T {
        self.state = UndoState::Empty;
        std::mem::replace(&mut self.held, self.null.clone())
    }
}
