//! # TaskList Component
//!
//! Scrollable view of the task entries, or the empty-state message.
//!
//! ## Responsibilities
//!
//! - Render one `TaskRow` per entry, in insertion order
//! - Keep the keyboard selection valid and visible
//! - Hit testing for mouse clicks (which row, which control)
//! - Cache row heights so scrolling and hit testing never re-wrap text
//!
//! ## Architecture
//!
//! `TaskListView` is a transient component (created each frame) that wraps
//! `&'a mut TaskListState` (persistent state) and the `TaskList` (props).

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::task::{ListView, Task, TaskId, TaskList};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::task_row::{RowEvent, TaskRow};
use crate::tui::event::TuiEvent;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

/// Scroll, selection and layout state for the task list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct TaskListState {
    pub scroll_state: ScrollViewState,
    /// Row height per entry from the last render
    pub heights: Vec<u16>,
    /// Cumulative heights: `prefix_heights[i]` is the bottom edge of row `i`
    pub prefix_heights: Vec<u16>,
    /// Task drawn in each row of the last render
    pub row_ids: Vec<TaskId>,
    /// Width the cache was computed for
    pub content_width: u16,
    /// Screen area of the list from the last render
    pub area: Rect,
    /// Selected entry index (Cursor mode)
    pub selected: Option<usize>,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute row heights for `tasks` at `width`.
    pub fn measure(&mut self, tasks: &[Task], width: u16) {
        self.content_width = width;
        self.row_ids = tasks.iter().map(Task::id).collect();
        self.heights = tasks
            .iter()
            .map(|task| TaskRow::calculate_height(task, width))
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, h| {
                *acc = acc.saturating_add(*h);
                Some(*acc)
            })
            .collect();
    }

    fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn row_top(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.prefix_heights[idx - 1] }
    }

    /// Keep the selection inside `0..len` (entries may have been deleted).
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => len - 1,
        });
        self.scroll_to_selected();
    }

    /// Scroll the viewport so the selected row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let top = self.row_top(idx);
        let bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;
        let viewport = self.area.height;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(viewport) {
            let y = bottom.saturating_sub(viewport).min(top);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.area.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Index of the row drawn at screen row `screen_y`, if any.
    pub fn row_at(&self, screen_y: u16) -> Option<usize> {
        if screen_y < self.area.y || screen_y >= self.area.bottom() {
            return None;
        }
        let content_y = (screen_y - self.area.y).saturating_add(self.scroll_state.offset().y);
        self.prefix_heights.iter().position(|&bottom| content_y < bottom)
    }

    /// Translate a click into a row event.
    ///
    /// Rows resolve to the task drawn there in the last frame, so a click
    /// on a row whose task has since been deleted hits nothing.
    pub fn hit_test(&self, tasks: &TaskList, position: Position) -> Option<RowEvent> {
        let right = self.area.x.saturating_add(self.content_width);
        if !self.area.contains(position) || position.x >= right {
            return None;
        }
        let idx = self.row_at(position.y)?;
        let task = tasks.get(*self.row_ids.get(idx)?)?;

        let row_area = Rect::new(
            self.area.x,
            self.area.y,
            self.content_width,
            self.heights[idx],
        );
        Some(TaskRow::new(task, false, Color::Reset).hit(row_area, position.x))
    }
}

impl EventHandler for TaskListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                for _ in 0..WHEEL_STEP {
                    self.scroll_state.scroll_up();
                }
                Some(())
            }
            TuiEvent::ScrollDown => {
                for _ in 0..WHEEL_STEP {
                    self.scroll_state.scroll_down();
                }
                self.clamp_scroll();
                Some(())
            }
            _ => None,
        }
    }
}

/// Scrollable task list.
/// Created fresh each frame with references to state and data.
pub struct TaskListView<'a> {
    pub state: &'a mut TaskListState,
    pub tasks: &'a TaskList,
    pub accent: Color,
    /// Whether the keyboard selection should be highlighted
    pub show_selection: bool,
}

impl<'a> TaskListView<'a> {
    pub fn new(
        state: &'a mut TaskListState,
        tasks: &'a TaskList,
        accent: Color,
        show_selection: bool,
    ) -> Self {
        Self {
            state,
            tasks,
            accent,
            show_selection,
        }
    }
}

impl<'a> Component for TaskListView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;

        let entries = match self.tasks.render() {
            ListView::Empty(message) => {
                self.state.measure(&[], area.width);
                self.state.selected = None;
                let top_pad = area.height / 3;
                let empty_area = Rect {
                    y: area.y + top_pad,
                    height: area.height - top_pad,
                    ..area
                };
                let empty = Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(empty, empty_area);
                return;
            }
            ListView::Entries(entries) => entries,
        };

        // -1 for scrollbar safe area
        let content_width = area.width.saturating_sub(1);
        self.state.measure(entries, content_width);
        self.state.clamp_selection(entries.len());
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.total_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, task) in entries.iter().enumerate() {
            let rect = Rect::new(0, self.state.row_top(i), content_width, self.state.heights[i]);
            let is_selected = self.show_selection && self.state.selected == Some(i);
            scroll_view.render_widget(TaskRow::new(task, is_selected, self.accent), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
