use crate::app::state::AppState;
use crate::game::{GameStatus, Marker};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const CELL_WIDTH: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Tic-Tac-Toe ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_style = match state.game.status {
        GameStatus::InProgress => Theme::text(),
        GameStatus::Won(_) => Theme::win_status(),
        GameStatus::Drawn => Theme::win_status(),
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(state.game.status_line(), status_style)),
        Line::default(),
    ];

    for row in 0..3 {
        for subrow in 0..3 {
            lines.push(grid_line(state, row, subrow));
        }
        if row < 2 {
            let rule = "─".repeat(CELL_WIDTH);
            lines.push(Line::from(Span::styled(
                format!("{rule}┼{rule}┼{rule}"),
                Theme::secondary(),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↑↓←→ move · Enter place · 1-9 place · n new game",
        Theme::secondary(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// One text row of the board: three cells separated by vertical rules. The
/// marker sits on the middle subrow; the cursor cell gets a background.
fn grid_line(state: &AppState, row: usize, subrow: usize) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for col in 0..3 {
        let index = row * 3 + col;
        let mark = state.game.cells[index];

        let text = if subrow == 1 {
            match mark {
                Some(m) => format!("  {}  ", m.symbol()),
                None => " ".repeat(CELL_WIDTH),
            }
        } else {
            " ".repeat(CELL_WIDTH)
        };

        let mut style = match mark {
            Some(Marker::X) => Theme::mark_x(),
            Some(Marker::O) => Theme::mark_o(),
            None => Theme::text(),
        };
        if index == state.game_cursor && state.game.status == GameStatus::InProgress {
            style = style.patch(Theme::cell_cursor());
        }

        spans.push(Span::styled(text, style));
        if col < 2 {
            spans.push(Span::styled("│", Theme::secondary()));
        }
    }
    Line::from(spans)
}
