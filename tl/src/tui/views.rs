//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from UiState but never modifies state.

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use taskcore::{Priority, Task};

use super::state::{InputMode, NoticeKind, UiState};

/// Priority colors, matching the original color coding
mod colors {
    use ratatui::style::Color;

    pub const HIGH: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const MEDIUM: Color = Color::Rgb(100, 149, 237); // Cornflower blue
    pub const LOW: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const DONE: Color = Color::DarkGray;
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const SUCCESS: Color = Color::Rgb(50, 205, 50);
    pub const ERROR: Color = Color::Rgb(220, 20, 60);
}

/// Get color for a priority tag
fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => colors::HIGH,
        Priority::Medium => colors::MEDIUM,
        Priority::Low => colors::LOW,
    }
}

/// Get status icon for a task
fn status_icon(task: &Task) -> &'static str {
    if task.completed { "✓" } else { "○" }
}

/// Main render function
pub fn render(state: &UiState, frame: &mut Frame) {
    let has_notice = state.notice.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(if has_notice { 1 } else { 0 }), // Notice banner
            Constraint::Length(3),                              // Input / search bar
            Constraint::Min(0),                                 // Task list
            Constraint::Length(1),                              // Footer keybinds
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    if has_notice {
        render_notice(state, frame, chunks[1]);
    }
    render_input_bar(state, frame, chunks[2]);
    render_task_list(state, frame, chunks[3]);
    render_footer(state, frame, chunks[4]);
}

/// Render header with title, counts, and the live selectors
fn render_header(state: &UiState, frame: &mut Frame, area: Rect) {
    let total = state.list.len();
    let open = state.list.tasks().iter().filter(|t| !t.completed).count();
    let done = total - open;

    let line = Line::from(vec![
        Span::styled(
            " Task Manager ",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{} open / {} done ", open, done)),
        Span::styled("| sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.sort_key.to_string(), Style::default().fg(colors::HEADER)),
        Span::styled(" | priority: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.priority.to_string(),
            Style::default().fg(priority_color(state.priority)),
        ),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the transient notice banner
fn render_notice(state: &UiState, frame: &mut Frame, area: Rect) {
    let Some(notice) = &state.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => colors::SUCCESS,
        NoticeKind::Error => colors::ERROR,
    };
    let banner = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", notice.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(banner, area);
}

/// Render the input/search bar depending on mode
fn render_input_bar(state: &UiState, frame: &mut Frame, area: Rect) {
    let (title, content, style) = match state.mode {
        InputMode::Insert => (
            format!(" New task ({}) ", state.priority),
            format!("{}█", state.input),
            Style::default().fg(Color::White),
        ),
        InputMode::Search => (
            " Search ".to_string(),
            format!("{}█", state.search),
            Style::default().fg(Color::White),
        ),
        InputMode::Normal => {
            if state.search.is_empty() {
                (
                    " Tasks ".to_string(),
                    "press 'a' to add, '/' to search".to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                (
                    " Search ".to_string(),
                    format!("filtering: {}", state.search),
                    Style::default().fg(Color::Gray),
                )
            }
        }
    };

    let bar = Paragraph::new(content)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(bar, area);
}

/// Render the derived task list, or the empty-state message
fn render_task_list(state: &UiState, frame: &mut Frame, area: Rect) {
    let visible = state.visible();

    if visible.is_empty() {
        let message = if state.list.is_empty() {
            "No tasks found. Add some tasks to get started!"
        } else {
            "No tasks match your search."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let title_style = if task.completed {
                Style::default().fg(colors::DONE).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            let icon_style = if task.completed {
                Style::default().fg(colors::SUCCESS)
            } else {
                Style::default().fg(Color::Gray)
            };

            let row = Row::new(vec![
                Span::styled(status_icon(task), icon_style),
                Span::styled(task.title.clone(), title_style),
                Span::styled(task.priority.to_string(), Style::default().fg(priority_color(task.priority))),
                Span::styled(format_created(task.created_at), Style::default().fg(Color::DarkGray)),
            ]);

            if i == state.selection.selected_index {
                row.style(Style::default().bg(colors::SELECTED_BG))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(table, area);
}

/// Render context-sensitive keybind hints
fn render_footer(state: &UiState, frame: &mut Frame, area: Rect) {
    let binds: &[(&str, &str)] = match state.mode {
        InputMode::Normal => &[
            ("a", "add"),
            ("/", "search"),
            ("s", "sort"),
            ("p", "priority"),
            ("space", "toggle"),
            ("d", "delete"),
            ("q", "quit"),
        ],
        InputMode::Insert => &[("enter", "add"), ("tab", "priority"), ("esc", "cancel")],
        InputMode::Search => &[("enter", "accept"), ("esc", "clear")],
    };

    let mut spans = Vec::new();
    for (key, label) in binds {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(Color::Gray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Short local-time stamp for the created column
fn format_created(created_at: DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%m-%d %H:%M").to_string()
}
