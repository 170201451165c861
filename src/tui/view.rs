// File: src/tui/view.rs
use crate::help::get_keyboard_help;
use crate::model::{ListKind, Severity};
use crate::tui::state::{AppState, Focus, QuickAction};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Cyan,
    }
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let toast_height = if state.toasts.is_empty() {
        0
    } else {
        state.toasts.len() as u16 + 2
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(toast_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled("◉ ", Style::default().fg(Color::Blue)),
        Span::styled(
            "Virtual Personal Assistant",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, v_chunks[0]);

    // --- Sections ---
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
            Constraint::Length(4),
        ])
        .split(v_chunks[1]);

    draw_section(f, state, ListKind::Tasks, body[0]);
    draw_section(f, state, ListKind::Appointments, body[1]);
    draw_actions(f, state, body[2]);

    // --- Toasts ---
    if !state.toasts.is_empty() {
        let lines: Vec<Line> = state
            .toasts
            .iter()
            .map(|t| {
                Line::from(Span::styled(
                    t.notice.message.clone(),
                    Style::default().fg(severity_color(t.notice.severity)),
                ))
            })
            .collect();
        let toasts = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Notifications "));
        f.render_widget(toasts, v_chunks[2]);
    }

    // --- Footer ---
    let help_text = match state.focus {
        Focus::TaskInput | Focus::AppointmentInput => "Enter:Add  Esc:List  Tab:Next  ?:Help",
        Focus::TaskList | Focus::AppointmentList => {
            "j/k:Select  d:Remove  i:Input  Tab:Next  ?:Help  q:Quit"
        }
        Focus::Actions => "a:Automate  r:Suggest  Enter:Run  Tab:Next  ?:Help  q:Quit",
    };
    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(footer, v_chunks[3]);

    if state.show_full_help {
        draw_help(f);
    }
}

fn draw_section(f: &mut Frame, state: &mut AppState, kind: ListKind, area: Rect) {
    let section_active = state.focus.kind() == Some(kind);
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} ({}) ",
            kind.title(),
            state.screen.section(kind).entries().len()
        ))
        .border_style(border_style(section_active));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    // Input row
    let input_focused = state.focus == Focus::input_of(kind);
    let buffer = state.screen.section(kind).buffer();
    let input_text = if buffer.is_empty() && !input_focused {
        Span::styled(kind.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(buffer.to_string())
    };
    let submit_label = match kind {
        ListKind::Tasks => " + ",
        ListKind::Appointments => " ⌚ ",
    };
    let input = Paragraph::new(Line::from(input_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(submit_label)
            .title_alignment(Alignment::Right)
            .border_style(border_style(input_focused)),
    );
    f.render_widget(input, chunks[0]);

    if input_focused {
        let prefix: String = buffer.chars().take(state.cursor(kind)).collect();
        let cursor_x = chunks[0].x + 1 + prefix.width() as u16;
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        f.set_cursor_position((cursor_x.min(max_x), chunks[0].y + 1));
    }

    // Entries
    let items: Vec<ListItem> = state
        .screen
        .section(kind)
        .entries()
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::raw(e.text.clone()),
                Span::styled(
                    format!("  {}", e.created.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_focused = state.focus == Focus::list_of(kind);
    let highlight = if list_focused {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol(if list_focused { "> " } else { "  " });
    f.render_stateful_widget(list, chunks[1], state.list_state_mut(kind));
}

fn draw_actions(f: &mut Frame, state: &mut AppState, area: Rect) {
    let active = state.focus == Focus::Actions;
    let items: Vec<ListItem> = QuickAction::iter()
        .map(|a| {
            let key = match a {
                QuickAction::AutomateWorkflows => "[a] ",
                QuickAction::SuggestReminders => "[r] ",
            };
            ListItem::new(Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Green)),
                Span::raw(a.label()),
            ]))
        })
        .collect();

    let highlight = if active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::Green)
            .fg(Color::Black)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Workflow Automation ")
                .border_style(border_style(active)),
        )
        .highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut state.action_state);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 70, f.area());
    let mut lines = Vec::new();
    for section in get_keyboard_help() {
        lines.push(Line::from(Span::styled(
            format!(" {} ", section.title.to_uppercase()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<28}", item.keys),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(item.desc),
            ]));
        }
        lines.push(Line::from(""));
    }

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Help (?/Esc to close) "));
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
