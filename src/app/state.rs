use crate::calc::CalcState;
use crate::config::AppConfig;
use crate::game::GameState;
use crate::todo::{Task, TaskList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Calculator,
    Tasks,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Board => "Tic-Tac-Toe",
            Screen::Calculator => "Calculator",
            Screen::Tasks => "Tasks",
        }
    }
}

/// Single-line text input with a byte-indexed cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFocus {
    TitleInput,
    DueInput,
    List,
}

/// Task screen state: the collection plus the entry form and selection.
#[derive(Debug)]
pub struct TaskPanelState {
    pub list: TaskList,
    pub title_input: InputState,
    pub due_input: InputState,
    pub focus: TaskFocus,
    pub selected: usize,
}

impl TaskPanelState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            list: TaskList::new(tasks),
            title_input: InputState::new(),
            due_input: InputState::new(),
            focus: TaskFocus::TitleInput,
            selected: 0,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            TaskFocus::TitleInput => TaskFocus::DueInput,
            TaskFocus::DueInput => {
                if self.list.is_empty() {
                    TaskFocus::TitleInput
                } else {
                    TaskFocus::List
                }
            }
            TaskFocus::List => TaskFocus::TitleInput,
        };
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list.tasks.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection on a valid row after the list shrinks.
    pub fn clamp_selection(&mut self) {
        if self.selected >= self.list.len() {
            self.selected = self.list.len().saturating_sub(1);
        }
        if self.list.is_empty() && self.focus == TaskFocus::List {
            self.focus = TaskFocus::TitleInput;
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub game: GameState,
    pub game_cursor: usize,
    pub calc: CalcState,
    pub tasks: TaskPanelState,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, tasks: Vec<Task>) -> Self {
        Self {
            config,
            screen: Screen::Board,
            game: GameState::new(),
            game_cursor: 4,
            calc: CalcState::new(),
            tasks: TaskPanelState::new(tasks),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }
}
