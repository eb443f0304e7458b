use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use chrono::NaiveDate;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Transient status lives until the next keypress
    state.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::F(1) => {
            state.set_screen(Screen::Board);
            return vec![];
        }
        KeyCode::F(2) => {
            state.set_screen(Screen::Calculator);
            return vec![];
        }
        KeyCode::F(3) => {
            state.set_screen(Screen::Tasks);
            return vec![];
        }
        _ => {}
    }

    match state.screen {
        Screen::Board => handle_board_key(state, key),
        Screen::Calculator => handle_calculator_key(state, key),
        Screen::Tasks => handle_tasks_key(state, key),
    }
}

fn handle_board_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left => {
            if state.game_cursor % 3 > 0 {
                state.game_cursor -= 1;
            }
        }
        KeyCode::Right => {
            if state.game_cursor % 3 < 2 {
                state.game_cursor += 1;
            }
        }
        KeyCode::Up => {
            if state.game_cursor >= 3 {
                state.game_cursor -= 3;
            }
        }
        KeyCode::Down => {
            if state.game_cursor < 6 {
                state.game_cursor += 3;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.game.play(state.game_cursor);
        }
        // Direct cell selection, 1-9 row-major from the top left
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            state.game.play(index);
            state.game_cursor = index;
        }
        KeyCode::Char('n') => state.game.reset(),
        _ => {}
    }
    vec![]
}

fn handle_calculator_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => state.calc.append_digit(c),
        KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => state.calc.append_operator(c),
        KeyCode::Enter | KeyCode::Char('=') => state.calc.evaluate(),
        KeyCode::Backspace => state.calc.backspace(),
        KeyCode::Esc => state.calc.clear(),
        _ => {}
    }
    vec![]
}

fn handle_tasks_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match state.tasks.focus {
        TaskFocus::TitleInput | TaskFocus::DueInput => handle_task_form_key(state, key),
        TaskFocus::List => handle_task_list_key(state, key),
    }
}

fn handle_task_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => state.tasks.cycle_focus(),
        KeyCode::Enter => return submit_task_form(state),
        KeyCode::Down => {
            if !state.tasks.list.is_empty() {
                state.tasks.focus = TaskFocus::List;
            }
        }
        _ => {
            let input = match state.tasks.focus {
                TaskFocus::DueInput => &mut state.tasks.due_input,
                _ => &mut state.tasks.title_input,
            };
            match key.code {
                KeyCode::Char(c) => input.insert_char(c),
                KeyCode::Backspace => input.delete_back(),
                KeyCode::Delete => input.delete_forward(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
    vec![]
}

/// Add a task from the form. An empty title is ignored; a malformed due date
/// keeps the form intact and shows a status message.
fn submit_task_form(state: &mut AppState) -> Vec<Action> {
    let title = state.tasks.title_input.text.clone();
    if title.trim().is_empty() {
        return vec![];
    }

    let due_text = state.tasks.due_input.text.trim().to_string();
    let due_date = if due_text.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&due_text, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                state.status_message = Some("Due date must be YYYY-MM-DD".to_string());
                return vec![];
            }
        }
    };

    if state.tasks.list.add(&title, due_date).is_some() {
        state.tasks.title_input.clear();
        state.tasks.due_input.clear();
        return vec![Action::PersistTasks];
    }
    vec![]
}

fn handle_task_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => state.tasks.cycle_focus(),
        KeyCode::Up => {
            if state.tasks.selected == 0 {
                state.tasks.focus = TaskFocus::DueInput;
            } else {
                state.tasks.select_prev();
            }
        }
        KeyCode::Down => state.tasks.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = state.tasks.selected_task().map(|t| t.id.clone()) {
                if state.tasks.list.toggle_completion(&id) {
                    return vec![Action::PersistTasks];
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = state.tasks.selected_task().map(|t| t.id.clone()) {
                if state.tasks.list.delete(&id) {
                    state.tasks.clamp_selection();
                    return vec![Action::PersistTasks];
                }
            }
        }
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::game::{GameStatus, Marker};

    fn new_state() -> AppState {
        AppState::new(AppConfig::default(), Vec::new())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_chars(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = new_state();
        for screen in [Screen::Board, Screen::Calculator, Screen::Tasks] {
            state.set_screen(screen);
            let actions = handle_event(
                &mut state,
                AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                    KeyCode::Char('c'),
                    KeyModifiers::CONTROL,
                ))),
            );
            assert_eq!(actions, vec![Action::Quit]);
        }
    }

    #[test]
    fn test_function_keys_switch_screens() {
        let mut state = new_state();
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::Calculator);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.screen, Screen::Tasks);
        press(&mut state, KeyCode::F(1));
        assert_eq!(state.screen, Screen::Board);
    }

    #[test]
    fn test_board_number_keys_play_through_a_win() {
        let mut state = new_state();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut state, KeyCode::Char(c));
        }
        assert_eq!(state.game.status, GameStatus::Won(Marker::X));
        // Terminal state: further moves ignored
        press(&mut state, KeyCode::Char('6'));
        assert_eq!(state.game.cells[5], None);
        // New game resets
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.game.status, GameStatus::InProgress);
    }

    #[test]
    fn test_board_cursor_stays_on_grid() {
        let mut state = new_state();
        state.game_cursor = 0;
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.game_cursor, 0);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.game_cursor, 4);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.game.cells[4], Some(Marker::X));
    }

    #[test]
    fn test_calculator_keyboard_flow() {
        let mut state = new_state();
        state.set_screen(Screen::Calculator);
        type_chars(&mut state, "2+3*4");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.calc.display(), "14");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.calc.display(), "0");
        assert_eq!(state.calc.last_result, None);
    }

    #[test]
    fn test_calculator_backspace_key() {
        let mut state = new_state();
        state.set_screen(Screen::Calculator);
        type_chars(&mut state, "12");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.calc.buffer, "1");
    }

    #[test]
    fn test_task_form_submit_persists() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "Buy milk");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(actions, vec![Action::PersistTasks]);
        assert_eq!(state.tasks.list.tasks[0].title, "Buy milk");
        // Inputs cleared after a successful add
        assert_eq!(state.tasks.title_input.text, "");
        assert_eq!(state.tasks.due_input.text, "");
    }

    #[test]
    fn test_task_form_empty_title_ignored() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "   ");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert!(state.tasks.list.is_empty());
    }

    #[test]
    fn test_task_form_due_date() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "Pay rent");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.tasks.focus, TaskFocus::DueInput);
        type_chars(&mut state, "2026-09-01");
        press(&mut state, KeyCode::Enter);
        let task = &state.tasks.list.tasks[0];
        assert_eq!(
            task.due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
    }

    #[test]
    fn test_task_form_bad_due_date_rejected() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "Pay rent");
        press(&mut state, KeyCode::Tab);
        type_chars(&mut state, "tomorrow");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert!(state.tasks.list.is_empty());
        assert!(state.status_message.is_some());
        // Form keeps its contents for correction
        assert_eq!(state.tasks.due_input.text, "tomorrow");
    }

    #[test]
    fn test_task_list_toggle_and_delete() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "a");
        press(&mut state, KeyCode::Enter);
        type_chars(&mut state, "b");
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Tab); // due input
        press(&mut state, KeyCode::Tab); // list
        assert_eq!(state.tasks.focus, TaskFocus::List);

        let actions = press(&mut state, KeyCode::Char(' '));
        assert_eq!(actions, vec![Action::PersistTasks]);
        assert!(state.tasks.list.tasks[0].completed);

        press(&mut state, KeyCode::Down);
        let actions = press(&mut state, KeyCode::Char('d'));
        assert_eq!(actions, vec![Action::PersistTasks]);
        assert_eq!(state.tasks.list.len(), 1);
        assert_eq!(state.tasks.list.tasks[0].title, "a");
        assert_eq!(state.tasks.selected, 0);
    }

    #[test]
    fn test_deleting_last_task_returns_focus_to_form() {
        let mut state = new_state();
        state.set_screen(Screen::Tasks);
        type_chars(&mut state, "only");
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char('d'));
        assert!(state.tasks.list.is_empty());
        assert_eq!(state.tasks.focus, TaskFocus::TitleInput);
    }
}
