//! # InputBox Component
//!
//! The entry form: a single-line text field with a placeholder prompt and
//! an add button to its right.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Handle submission (Enter or a click on the add button)
//! - Display the buffer, or the placeholder when it is empty
//!
//! ## State Management
//!
//! The buffer is a local editing copy. The pending input proper belongs to
//! the core `App`: every edit is reported as `InputEvent::Changed`, and the
//! parent pushes the core value back with [`InputBox::set_text`] after each
//! update (which is how a successful add clears the field).

mod cursor;
mod text;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text::{
    inner_width, next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
    visible_slice,
};

pub const PLACEHOLDER: &str = "새로운 할 일 입력...";
pub const ADD_LABEL: &str = "추가";
/// Add button: label (4 columns) + padding + borders
const ADD_BUTTON_WIDTH: u16 = 8;
/// Gap between the field and the add button
const BUTTON_GAP: u16 = 1;
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked to add the current text (Enter or add button)
    Submit,
    /// Text content changed
    Changed(String),
}

/// Which part of the entry form a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHit {
    Field,
    AddButton,
}

/// Single-line text input with an add button.
///
/// # Props
///
/// - `focused`: whether keystrokes go here (Input mode)
/// - `accent`: border / button colour
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    pub focused: bool,
    pub accent: Color,
    cursor: CursorState,
    /// Areas from the last render, for hit testing
    field_area: Rect,
    button_area: Rect,
}

impl InputBox {
    pub fn new(accent: Color) -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            accent,
            cursor: CursorState::new(),
            field_area: Rect::default(),
            button_area: Rect::default(),
        }
    }

    /// Replace the buffer with `text` (prop sync from the core pending input).
    ///
    /// Leaves the cursor alone when nothing changed.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = text.to_string();
        if self.buffer.is_empty() {
            self.cursor.reset();
        } else {
            self.cursor.pos = self.buffer.len();
        }
    }

    /// Which part of the form is at `position`, using the last rendered layout.
    pub fn hit_test(&self, position: Position) -> Option<InputHit> {
        if self.button_area.contains(position) {
            Some(InputHit::AddButton)
        } else if self.field_area.contains(position) {
            Some(InputHit::Field)
        } else {
            None
        }
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    fn render_add_button(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent));
        let button = Paragraph::new(ADD_LABEL)
            .centered()
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);
        frame.render_widget(button, area);
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [field_area, _, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(ADD_BUTTON_WIDTH),
        ])
        .areas(area);
        self.field_area = field_area;
        self.button_area = button_area;

        self.cursor.update_scroll(&self.buffer, field_area.width);

        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let field = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            let visible = visible_slice(
                &self.buffer,
                self.cursor.scroll_col,
                inner_width(field_area.width),
            );
            Paragraph::new(visible)
        };
        frame.render_widget(field.block(block), field_area);

        self.render_add_button(frame, button_area);

        if self.focused {
            let (x, y) = self.cursor.screen_pos(&self.buffer, field_area);
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: fold line breaks into spaces
                let text = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
                self.insert_str(&text);
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::DeleteWordBack => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_word_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                None
            }
            TuiEvent::WordLeft => {
                self.cursor.pos = prev_word_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::WordRight => {
                self.cursor.pos = next_word_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
