use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: active screen | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}
