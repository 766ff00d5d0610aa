//! # TaskRow Component
//!
//! Stateless rendering of one task entry:
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ ○ Buy milk                 ✕ │
//! ╰──────────────────────────────╯
//! ```
//!
//! The indicator and text form one tap target (toggle); the `✕` is the
//! other (delete). Taps are reported upward as [`RowEvent`]s; the row never
//! touches the task list itself.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::task::{Task, TaskId};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and row content.
const CONTENT_PAD_H: u16 = 1;
/// Columns for the completion indicator plus its gap.
const INDICATOR_WIDTH: u16 = 2;
/// Columns for the delete control plus its gap.
const DELETE_WIDTH: u16 = 2;
/// Borders (1 left + 1 right) and padding.
const FRAME_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Everything on a row that is not task text.
const HORIZONTAL_OVERHEAD: u16 = FRAME_OVERHEAD + INDICATOR_WIDTH + DELETE_WIDTH;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;

const CHECKED: &str = "●";
const UNCHECKED: &str = "○";
const DELETE: &str = "✕";
/// Delete control colour.
pub const DELETE_COLOR: Color = Color::Rgb(0xFF, 0x3B, 0x30);

/// What a tap on a row asks the list screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    Toggle(TaskId),
    Delete(TaskId),
}

#[derive(Clone, Copy)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// Keyboard selection in Cursor mode
    pub is_selected: bool,
    pub accent: Color,
}

impl<'a> TaskRow<'a> {
    pub fn new(task: &'a Task, is_selected: bool, accent: Color) -> Self {
        Self {
            task,
            is_selected,
            accent,
        }
    }

    /// Height of a row for `task` at `width`, without rendering it.
    ///
    /// Rendering uses the same wrapped lines, so the two never disagree.
    pub fn calculate_height(task: &Task, width: u16) -> u16 {
        let lines = u16::try_from(wrap_text(task.text(), width).len()).unwrap_or(u16::MAX);
        lines.max(1).saturating_add(VERTICAL_OVERHEAD)
    }

    /// Which control a click at `column` hit, given the row was drawn in `area`.
    ///
    /// The delete control owns the right edge of the row; everything else
    /// toggles.
    pub fn hit(&self, area: Rect, column: u16) -> RowEvent {
        let delete_start = area
            .right()
            .saturating_sub(1 + CONTENT_PAD_H + DELETE_WIDTH);
        if column >= delete_start {
            RowEvent::Delete(self.task.id())
        } else {
            RowEvent::Toggle(self.task.id())
        }
    }

    fn text_style(&self) -> Style {
        if self.task.completed {
            Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
        } else {
            Style::default()
        }
    }

    fn indicator(&self) -> Span<'static> {
        let style = Style::default().fg(self.accent);
        if self.task.completed {
            Span::styled(CHECKED, style.add_modifier(Modifier::BOLD))
        } else {
            Span::styled(UNCHECKED, style)
        }
    }
}

/// Wrap task text for a row of total `width`.
fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return vec![text.to_string()];
    }
    let options = textwrap::Options::new(content_width as usize).break_words(true);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

impl<'a> Widget for TaskRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(area);
        block.render(area, buf);

        let [indicator_area, text_area, delete_area] = Layout::horizontal([
            Constraint::Length(INDICATOR_WIDTH),
            Constraint::Min(0),
            Constraint::Length(DELETE_WIDTH),
        ])
        .areas(inner);

        Paragraph::new(Line::from(self.indicator())).render(indicator_area, buf);

        let style = self.text_style();
        let lines: Vec<Line> = wrap_text(self.task.text(), area.width)
            .into_iter()
            .map(|line| Line::styled(line, style))
            .collect();
        Paragraph::new(lines).render(text_area, buf);

        Paragraph::new(Line::from(Span::styled(DELETE, Style::default().fg(DELETE_COLOR))))
            .right_aligned()
            .render(delete_area, buf);
    }
}

impl<'a> Component for TaskRow<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskList;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_task(text: &str, completed: bool) -> Task {
        let mut list = TaskList::new();
        let id = list.add(text).unwrap();
        if completed {
            list.toggle(id);
        }
        list.get(id).unwrap().clone()
    }

    fn render_row(task: &Task, width: u16) -> Terminal<TestBackend> {
        let height = TaskRow::calculate_height(task, width);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(TaskRow::new(task, false, Color::Blue), f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn calculate_height_single_line() {
        let task = make_task("Buy milk", false);
        assert_eq!(TaskRow::calculate_height(&task, 40), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_wraps_long_text() {
        let task = make_task("Hello world", false);
        // 13 - HORIZONTAL_OVERHEAD = 5 columns of text: "Hello" | "world"
        assert_eq!(TaskRow::calculate_height(&task, 13), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_degenerate_width() {
        let task = make_task("Hello world", false);
        assert_eq!(TaskRow::calculate_height(&task, 0), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_saturates_for_huge_text() {
        let task = make_task(&"a ".repeat(70_000), false);
        assert_eq!(TaskRow::calculate_height(&task, 9), u16::MAX);
    }

    #[test]
    fn render_shows_text_indicator_and_delete() {
        let task = make_task("Buy milk", false);
        let terminal = render_row(&task, 30);
        let text = buffer_text(&terminal);
        assert!(text.contains("Buy milk"));
        assert!(text.contains(UNCHECKED));
        assert!(text.contains(DELETE));
    }

    #[test]
    fn completed_task_is_struck_through() {
        let task = make_task("Buy milk", true);
        let terminal = render_row(&task, 30);
        let text = buffer_text(&terminal);
        assert!(text.contains(CHECKED));

        let buffer = terminal.backend().buffer();
        let cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "B")
            .expect("task text rendered");
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn open_task_is_not_struck_through() {
        let task = make_task("Buy milk", false);
        let terminal = render_row(&task, 30);
        let buffer = terminal.backend().buffer();
        let cell = buffer.content().iter().find(|c| c.symbol() == "B").unwrap();
        assert!(!cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn hit_right_edge_deletes_rest_toggles() {
        let task = make_task("Buy milk", false);
        let row = TaskRow::new(&task, false, Color::Blue);
        let area = Rect::new(0, 0, 30, 3);

        assert_eq!(row.hit(area, 2), RowEvent::Toggle(task.id()));
        assert_eq!(row.hit(area, 10), RowEvent::Toggle(task.id()));
        assert_eq!(row.hit(area, 27), RowEvent::Delete(task.id()));
        assert_eq!(row.hit(area, 29), RowEvent::Delete(task.id()));
    }

    #[test]
    fn delete_control_is_drawn_inside_delete_hit_zone() {
        let task = make_task("Buy milk", false);
        let terminal = render_row(&task, 30);
        let buffer = terminal.backend().buffer();
        let x = (0..30)
            .find(|&x| buffer[(x, 1)].symbol() == DELETE)
            .expect("delete control rendered");

        let row = TaskRow::new(&task, false, Color::Blue);
        assert_eq!(row.hit(Rect::new(0, 0, 30, 3), x), RowEvent::Delete(task.id()));
    }
}
