use crate::app::state::{AppState, InputState, TaskFocus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Tasks ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry form
            Constraint::Min(1),    // Task list
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_form(frame, chunks[0], state);
    render_list(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Title
            Constraint::Length(18), // Due date
        ])
        .split(area);

    render_input(
        frame,
        chunks[0],
        " Title ",
        &state.tasks.title_input,
        state.tasks.focus == TaskFocus::TitleInput,
    );
    render_input(
        frame,
        chunks[1],
        " Due ",
        &state.tasks.due_input,
        state.tasks.focus == TaskFocus::DueInput,
    );
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, input: &InputState, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(input.text.as_str()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + input.text[..input.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.tasks.list.is_empty() {
        let empty = Paragraph::new(" No tasks yet — type a title above and press Enter")
            .style(Theme::secondary());
        frame.render_widget(empty, area);
        return;
    }

    let visible = area.height as usize;
    let selected = state.tasks.selected;
    // Keep the selected row on screen
    let start = if selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in state
        .tasks
        .list
        .tasks
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
    {
        let is_selected = i == selected && state.tasks.focus == TaskFocus::List;
        let checkbox = if task.completed { "[x] " } else { "[ ] " };

        let title_style = if is_selected {
            Theme::selected_row()
        } else if task.completed {
            Theme::completed_task()
        } else {
            Theme::text()
        };

        let mut spans = vec![
            Span::styled(
                checkbox,
                if is_selected {
                    Theme::selected_row()
                } else {
                    Theme::secondary()
                },
            ),
            Span::styled(task.title.clone(), title_style),
        ];
        if let Some(due) = task.due_date {
            spans.push(Span::styled(
                format!("  Due: {}", due.format(&state.config.ui.date_format)),
                if is_selected {
                    Theme::selected_row()
                } else {
                    Theme::due_date()
                },
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let total = state.tasks.list.len();
    let done = state
        .tasks
        .list
        .tasks
        .iter()
        .filter(|t| t.completed)
        .count();
    let line = Line::from(vec![
        Span::styled(format!(" {} tasks · {} done", total, done), Theme::text()),
        Span::styled(
            "   Tab form/list · Space toggle · d delete",
            Theme::secondary(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
