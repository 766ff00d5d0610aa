//! # TitleBar Component
//!
//! Top line of the screen: the title, centered, and a completion counter
//! on the right once there is at least one task.
//!
//! ```text
//!                 할 일 목록                    완료 1/3
//! ```
//!
//! Stateless: all three props come from the core `App` each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

pub struct TitleBar {
    pub title: &'static str,
    pub completed: usize,
    pub total: usize,
}

impl TitleBar {
    pub fn new(title: &'static str, completed: usize, total: usize) -> Self {
        Self {
            title,
            completed,
            total,
        }
    }

    fn counter(&self) -> Option<String> {
        (self.total > 0).then(|| format!("완료 {}/{}", self.completed, self.total))
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Span::styled(
            self.title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(title, area);

        if let Some(counter) = self.counter() {
            let width = unicode_width::UnicodeWidthStr::width(counter.as_str()) as u16;
            let [_, counter_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(width + 1)]).areas(area);
            let counter =
                Paragraph::new(Span::styled(counter, Style::default().fg(Color::DarkGray)));
            frame.render_widget(counter, counter_area);
        }
    }
}
