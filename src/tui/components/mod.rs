//! # TUI Components
//!
//! All UI components of the to-do screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Screen title and completion counter
//! - `TaskRow`: One task entry with its indicator and delete control
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `InputBox`: The entry form (text field + add button)
//! - `TaskListView` / `TaskListState`: Scrollable rows, selection, hit testing
//!
//! ## Data Flow
//!
//! Data flows down as props: the list hands each `TaskRow` a `&Task`.
//! Events flow up: a row reports `RowEvent::Toggle(id)` or
//! `RowEvent::Delete(id)`, the input box reports `InputEvent`s, and the
//! event loop turns them into core `Action`s. No component mutates the
//! task list itself.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Title + counter)
//! ├── task_row.rs      (Single entry renderer)
//! ├── task_list.rs     (Scrollable entry container)
//! └── input_box/       (Entry form)
//! ```

pub mod input_box;
pub mod task_list;
pub mod task_row;
mod title_bar;

pub use input_box::{InputBox, InputEvent, InputHit};
pub use task_list::{TaskListState, TaskListView};
pub use task_row::{RowEvent, TaskRow};
pub use title_bar::TitleBar;
