mod board;
mod calculator;
mod layout;
mod status_bar;
mod tasks;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    match state.screen {
        Screen::Board => board::render(frame, app_layout.content, state),
        Screen::Calculator => calculator::render(frame, app_layout.content, state),
        Screen::Tasks => tasks::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
