use crate::app::state::{AppState, Screen};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SCREENS: [(Screen, &str); 3] = [
    (Screen::Board, " F1 Board "),
    (Screen::Calculator, " F2 Calc "),
    (Screen::Tasks, " F3 Tasks "),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    for (screen, label) in SCREENS {
        let style = if screen == state.screen {
            Theme::tab_active()
        } else {
            Theme::status_bar()
        };
        parts.push(Span::styled(label, style));
    }

    match &state.status_message {
        Some(msg) => parts.push(Span::styled(format!("  {} ", msg), Theme::status_error())),
        None => parts.push(Span::styled("  Ctrl+C quit ", Theme::status_bar())),
    }

    // Pad to fill, active screen name at the right edge
    let screen_name = state.screen.title();
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + screen_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", screen_name),
        Theme::tab_active(),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
