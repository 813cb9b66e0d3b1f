//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use super::view;
use crate::cli::session::Session;
use crate::domain::{Filter, Task, TaskStore};

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a new task; the text lives in the store's pending input
    NewTask,
}

/// Application state
pub struct App {
    /// Task list and display settings
    session: Session,

    /// Input mode
    input_mode: InputMode,

    /// Selected index into the visible tasks
    selected: usize,

    /// Status message to display
    status_message: Option<String>,

    /// Whether to quit
    should_quit: bool,
}

impl App {
    /// Create a new application
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_mode: InputMode::Normal,
            selected: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| view::draw(frame, self))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    pub fn store(&self) -> &TaskStore {
        &self.session.store
    }

    pub fn display_limit(&self) -> usize {
        self.session.display_limit
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any mode
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::NewTask => self.handle_new_task_key(key),
        }
    }

    /// Handle keys in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),

            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('a') => self.toggle_all(),

            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Completed),
            KeyCode::Char('3') => self.set_filter(Filter::Pending),
            KeyCode::Tab => {
                let next = self.store().filter().next();
                self.set_filter(next);
            }

            KeyCode::Char('n') | KeyCode::Char('i') => {
                self.input_mode = InputMode::NewTask;
            }

            KeyCode::Char('?') => {
                self.status_message = Some(
                    "j/k:move space:toggle a:all 1-3/tab:filter n:new q:quit".to_string(),
                );
            }

            _ => {}
        }
    }

    /// Handle keys in new task mode
    fn handle_new_task_key(&mut self, key: KeyEvent) {
        let store = &mut self.session.store;

        match key.code {
            KeyCode::Esc => {
                // Pending text is kept for the next time input mode opens
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                if store.commit_pending() {
                    self.input_mode = InputMode::Normal;
                    self.status_message = store.tasks().last().map(|t| format!("Added {}", t.id));
                    self.clamp_selection();
                } else {
                    self.status_message = Some("Task text cannot be empty".to_string());
                }
            }
            KeyCode::Backspace => {
                let mut text = store.pending().to_string();
                text.pop();
                store.set_pending(text);
            }
            KeyCode::Char(c) => {
                let mut text = store.pending().to_string();
                text.push(c);
                store.set_pending(text);
            }
            _ => {}
        }
    }

    /// Tasks matching the active filter
    pub fn visible(&self) -> Vec<&Task> {
        self.store().visible_tasks().collect()
    }

    fn move_selection_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Keeps the selection inside the visible list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.visible().get(self.selected).map(|t| t.id) else {
            return;
        };

        self.session.store.toggle(id);
        self.clamp_selection();
    }

    fn toggle_all(&mut self) {
        let value = !self.store().all_done();
        self.session.store.set_all_done(value);
        self.status_message = Some(if value {
            "Marked all tasks done".to_string()
        } else {
            "Marked all tasks pending".to_string()
        });
        self.clamp_selection();
    }

    fn set_filter(&mut self, filter: Filter) {
        self.session.store.set_filter(filter);
        self.clamp_selection();
    }
}
