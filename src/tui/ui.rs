use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, TITLE};
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{TaskListView, TitleBar};
use crate::tui::{InputMode, TuiState};

/// Outer margin around the whole screen.
const SCREEN_MARGIN: u16 = 1;

/// Screen regions, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub list: Rect,
    pub input: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(frame_area: Rect) -> Self {
        use Constraint::{Length, Min};
        let inner = frame_area.inner(Margin::new(SCREEN_MARGIN * 2, SCREEN_MARGIN));
        let [title, _, list, _, input, help] = Layout::vertical([
            Length(1),
            Length(1),
            Min(0),
            Length(1),
            Length(INPUT_HEIGHT),
            Length(1),
        ])
        .areas(inner);
        Self {
            title,
            list,
            input,
            help,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = ScreenLayout::new(frame.area());

    TitleBar::new(TITLE, app.tasks.completed_count(), app.tasks.len()).render(frame, layout.title);

    let show_selection = tui.input_mode == InputMode::Cursor;
    TaskListView::new(&mut tui.task_list, &app.tasks, tui.accent, show_selection)
        .render(frame, layout.list);

    tui.input_box.render(frame, layout.input);

    frame.render_widget(help_line(tui.input_mode), layout.help);
}

fn help_line(mode: InputMode) -> Paragraph<'static> {
    let text = match mode {
        InputMode::Input => " Enter 추가  ↑↓ 목록 이동  Esc 목록  Ctrl+C 종료 ",
        InputMode::Cursor => " Space 완료 표시  d 삭제  ↑↓ 이동  입력하면 추가  Esc 종료 ",
    };
    Paragraph::new(Line::from(text))
        .style(Style::default().fg(Color::DarkGray))
        .centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::task::EMPTY_MESSAGE;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(&terminal).chars().filter(|c| *c != ' ').collect()
    }

    fn squash(s: &str) -> String {
        s.chars().filter(|c| *c != ' ').collect()
    }

    #[test]
    fn layout_stacks_regions_in_order() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.y, 1);
        assert!(layout.title.y < layout.list.y);
        assert!(layout.list.bottom() <= layout.input.y);
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.help.y, layout.input.bottom());
    }

    #[test]
    fn empty_screen_shows_empty_state() {
        let app = App::new();
        let mut tui = TuiState::new(Color::Blue);
        let text = draw(&app, &mut tui);
        assert!(text.contains(&squash(TITLE)));
        assert!(text.contains(&squash(EMPTY_MESSAGE)));
    }

    #[test]
    fn screen_reflects_each_update() {
        let mut app = App::new();
        let mut tui = TuiState::new(Color::Blue);

        update(&mut app, Action::Add("Buy milk".to_string()));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Buymilk"));
        assert!(text.contains("완료0/1"));
        assert!(!text.contains(&squash(EMPTY_MESSAGE)));

        let id = app.tasks.iter().next().unwrap().id();
        update(&mut app, Action::Toggle(id));
        assert!(draw(&app, &mut tui).contains("완료1/1"));

        update(&mut app, Action::Delete(id));
        assert!(draw(&app, &mut tui).contains(&squash(EMPTY_MESSAGE)));
    }

    #[test]
    fn help_line_follows_mode() {
        let app = App::new();
        let mut tui = TuiState::new(Color::Blue);
        assert!(draw(&app, &mut tui).contains("Enter추가"));
        tui.input_mode = InputMode::Cursor;
        assert!(draw(&app, &mut tui).contains("d삭제"));
    }
}
