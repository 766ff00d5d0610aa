//! # Application State
//!
//! Core state for the to-do screen. Domain data only - no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tasks: TaskList           // the to-do entries, insertion order
//! └── pending_input: String     // text typed but not yet added
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::task::{TaskId, TaskList};

/// Screen title, rendered at the top of the list.
pub const TITLE: &str = "할 일 목록";

#[derive(Debug, Default)]
pub struct App {
    pub tasks: TaskList,
    pub pending_input: String,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the pending input as a new task and clear it.
    ///
    /// Whitespace-only input is left untouched so the user can keep typing.
    pub fn add_pending(&mut self) -> Option<TaskId> {
        let id = self.tasks.add(&self.pending_input)?;
        self.pending_input.clear();
        Some(id)
    }
}
