//! List view: filter tabs, the visible tasks, and the input/status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use super::app::{App, InputMode};
use crate::domain::Filter;

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter tabs
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Input / status bar
        ])
        .split(frame.area());

    draw_filters(frame, app, chunks[0]);
    draw_tasks(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Filter::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}:{}", i + 1, f))
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|f| *f == app.store().filter())
        .unwrap_or(0);

    let all_done = if app.store().all_done() { "[x]" } else { "[ ]" };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!("Tasks {} all done", all_done))
                .borders(Borders::ALL),
        );

    frame.render_widget(tabs, area);
}

fn draw_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            let (mark, style) = if task.done {
                ("[x]", Style::default().fg(Color::DarkGray))
            } else {
                ("[ ]", Style::default().fg(Color::Green))
            };
            ListItem::new(format!("{} {}", mark, task.display_text(app.display_limit())))
                .style(style)
        })
        .collect();

    let counts = app.store().counts();
    let title = format!(
        "{} of {} ({} done)",
        visible.len(),
        counts.total,
        counts.completed
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match app.input_mode() {
        InputMode::Normal => {
            let msg = app
                .status_message()
                .unwrap_or("[space]toggle [a]ll [1-3]filter [n]ew [q]uit");
            (msg.to_string(), Style::default())
        }
        InputMode::NewTask => {
            let msg = match app.status_message() {
                Some(msg) => format!("New task: {}_  ({})", app.store().pending(), msg),
                None => format!("New task: {}_", app.store().pending()),
            };
            (msg, Style::default().fg(Color::Yellow))
        }
    };

    let paragraph = Paragraph::new(content)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
