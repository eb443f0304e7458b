use crate::app::state::AppState;
use crate::calc::format_number;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

const KEYPAD: [&str; 9] = [
    "┌───┬───┬───┬───┐",
    "│ 7 │ 8 │ 9 │ / │",
    "├───┼───┼───┼───┤",
    "│ 4 │ 5 │ 6 │ * │",
    "├───┼───┼───┼───┤",
    "│ 1 │ 2 │ 3 │ - │",
    "├───┼───┼───┼───┤",
    "│ 0 │ . │ = │ + │",
    "└───┴───┴───┴───┘",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Calculator ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(1),    // Keypad legend
        ])
        .split(inner);

    render_display(frame, chunks[0], state);
    render_keypad(frame, chunks[1], state);
}

fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let display_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let display_inner = display_block.inner(area);
    frame.render_widget(display_block, area);

    let style = if state.calc.error.is_some() {
        Theme::error_message()
    } else {
        Theme::display_text()
    };
    let display = Paragraph::new(state.calc.display())
        .style(style)
        .alignment(Alignment::Right);
    frame.render_widget(display, display_inner);
}

fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(result) = state.calc.last_result {
        lines.push(Line::from(Span::styled(
            format!("ans = {}", format_number(result)),
            Theme::result_memory(),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());

    for row in KEYPAD {
        lines.push(Line::from(Span::styled(row, Theme::secondary())));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter evaluate · Backspace delete · Esc clear",
        Theme::secondary(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
