//! # Core Application Logic
//!
//! The to-do screen's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Task / TaskList      │
//!                    │  • State (App)          │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: `Task`, `TaskId` and the ordered `TaskList`
//! - [`state`]: The `App` struct, the screen's state container
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Styling and logging settings (never affects task behavior)

pub mod action;
pub mod config;
pub mod state;
pub mod task;
