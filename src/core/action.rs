//! # Actions
//!
//! Everything that can happen on the to-do screen becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! User clicks a row's delete control? That's `Action::Delete(id)`.
//!
//! The `update()` function applies an action to the state and reports
//! what the caller should do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::core::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The entry form's text changed.
    EditInput(String),
    /// Add the pending input (Enter or the add button).
    Submit,
    /// Add the given text directly, bypassing the pending input.
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; the next frame must reflect it.
    Render,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::EditInput(text) => {
            if app.pending_input == text {
                return Effect::None;
            }
            app.pending_input = text;
            Effect::Render
        }
        Action::Submit => match app.add_pending() {
            Some(id) => {
                debug!("added task {} ({} total)", id, app.tasks.len());
                Effect::Render
            }
            None => Effect::None,
        },
        Action::Add(text) => match app.tasks.add(&text) {
            Some(id) => {
                debug!("added task {} ({} total)", id, app.tasks.len());
                Effect::Render
            }
            None => Effect::None,
        },
        Action::Toggle(id) => {
            if app.tasks.toggle(id) {
                Effect::Render
            } else {
                debug!("toggle ignored, no task {}", id);
                Effect::None
            }
        }
        Action::Delete(id) => {
            if app.tasks.delete(id) {
                Effect::Render
            } else {
                debug!("delete ignored, no task {}", id);
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}
