//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on the screen animates, so the loop sleeps in `poll` until an
//! event arrives, drains every pending event, then draws once. Each event
//! dispatches at most one action, which runs to completion before the next
//! event is looked at.
//!
//! ## Modes
//!
//! - **Input**: keystrokes edit the entry form; Enter adds.
//! - **Cursor**: arrows move a selection over the rows; Space toggles,
//!   `d` deletes, typing anything else goes back to Input.
//!
//! Mouse clicks work in both modes.

mod component;
pub mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use ratatui::layout::Position;
use ratatui::style::Color;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, InputHit, RowEvent, TaskListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Used when the configured accent colour cannot be parsed.
pub const DEFAULT_ACCENT: Color = Color::Rgb(0x21, 0x96, 0xF3);

/// How long to block waiting for input before looping.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigate rows with arrow keys. Typing auto-switches to Input.
    Cursor,
    /// Text editing in the entry form. Esc switches to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub task_list: TaskListState,
    pub input_box: InputBox,
    pub input_mode: InputMode,
    pub accent: Color,
}

impl TuiState {
    pub fn new(accent: Color) -> Self {
        Self {
            task_list: TaskListState::new(),
            input_box: InputBox::new(accent),
            input_mode: InputMode::Input, // User expects to type immediately
            accent,
        }
    }

    fn set_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input_box.focused = mode == InputMode::Input;
    }
}

/// Parse a configured colour ("blue", "#2196F3", ...), falling back to the default.
pub fn parse_accent(value: &str) -> Color {
    value.parse().unwrap_or_else(|_| {
        warn!("Unknown accent colour {:?}, using default", value);
        DEFAULT_ACCENT
    })
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> io::Result<Self> {
        // Disambiguated escape codes make Esc and Ctrl+<key> arrive reliably;
        // terminals without the Kitty protocol ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!("Terminal modes enabled (bracketed paste, steady block cursor, mouse={})", mouse);
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(parse_accent(&config.accent_color));

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new(config.mouse)
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Screen closed with {} task(s) discarded", app.tasks.len());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Drain pending events before the next draw, but stop at the first
        // one that changed the tasks so the screen shows it before more
        // input is read
        let mut next = Some(first_event);
        while let Some(event) = next {
            let before = task_snapshot(app);
            if dispatch(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            if task_snapshot(app) != before {
                break;
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Add and delete change the length; a toggle always moves the completed count.
fn task_snapshot(app: &App) -> (usize, usize) {
    (app.tasks.len(), app.tasks.completed_count())
}

fn row_action(event: RowEvent) -> Action {
    match event {
        RowEvent::Toggle(id) => Action::Toggle(id),
        RowEvent::Delete(id) => Action::Delete(id),
    }
}

/// Route one event to the component that owns it and apply the resulting action.
///
/// Hit testing uses the layout of the last drawn frame.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = route(app, tui, event);

    // Sync props back from the core
    tui.input_box.set_text(&app.pending_input);
    tui.task_list.clamp_selection(app.tasks.len());
    effect
}

fn route(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::Render,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.task_list.handle_event(&event);
            return Effect::Render;
        }
        TuiEvent::MouseClick(column, row) => return click(app, tui, Position::new(column, row)),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Input => match event {
            TuiEvent::Escape => {
                tui.set_mode(InputMode::Cursor);
                if tui.task_list.selected.is_none() {
                    tui.task_list.select_prev(app.tasks.len());
                }
                Effect::Render
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown if !app.tasks.is_empty() => {
                tui.set_mode(InputMode::Cursor);
                if event == TuiEvent::CursorUp {
                    tui.task_list.select_prev(app.tasks.len());
                } else {
                    tui.task_list.select_next(app.tasks.len());
                }
                Effect::Render
            }
            _ => match tui.input_box.handle_event(&event) {
                Some(InputEvent::Submit) => update(app, Action::Submit),
                Some(InputEvent::Changed(text)) => update(app, Action::EditInput(text)),
                None => Effect::None,
            },
        },
        InputMode::Cursor => {
            let selected = tui
                .task_list
                .selected
                .and_then(|idx| app.tasks.as_slice().get(idx))
                .map(|task| task.id());
            match event {
                TuiEvent::Escape => update(app, Action::Quit),
                TuiEvent::CursorUp => {
                    tui.task_list.select_prev(app.tasks.len());
                    Effect::Render
                }
                TuiEvent::CursorDown => {
                    tui.task_list.select_next(app.tasks.len());
                    Effect::Render
                }
                TuiEvent::InputChar(' ') | TuiEvent::Submit => match selected {
                    Some(id) => update(app, Action::Toggle(id)),
                    None => Effect::None,
                },
                TuiEvent::InputChar('d') | TuiEvent::Delete => match selected {
                    Some(id) => update(app, Action::Delete(id)),
                    None => Effect::None,
                },
                // Typing auto-switches to Input mode and forwards the event
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                    tui.set_mode(InputMode::Input);
                    match tui.input_box.handle_event(&event) {
                        Some(InputEvent::Changed(text)) => update(app, Action::EditInput(text)),
                        _ => Effect::Render,
                    }
                }
                _ => Effect::None,
            }
        }
    }
}

fn click(app: &mut App, tui: &mut TuiState, position: Position) -> Effect {
    if let Some(row_event) = tui.task_list.hit_test(&app.tasks, position) {
        debug!("Row click at {:?}: {:?}", position, row_event);
        return update(app, row_action(row_event));
    }

    match tui.input_box.hit_test(position) {
        Some(InputHit::AddButton) => {
            tui.set_mode(InputMode::Input);
            update(app, Action::Submit)
        }
        Some(InputHit::Field) => {
            tui.set_mode(InputMode::Input);
            Effect::Render
        }
        None => Effect::None,
    }
}
