use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{render_confirm_dialog, render_list_controls_line};
use crate::ui::{theme, App};

pub fn render_contacts(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.contacts_screen;
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_list_controls_line(
        f,
        chunks[0],
        &screen.controls.search,
        screen.controls.searching,
        screen.filter.label(),
    );

    if let Some(error) = &screen.controls.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme::ACCENT_ERROR),
            ))),
            chunks[1],
        );
    }

    let panes = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    render_message_list(f, app, panes[0]);
    render_detail_pane(f, app, panes[1]);

    let (_, page) = app.contacts_page();
    let unread = app.unread_count();
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "page {}/{} · {} message(s) · {} unread",
                page.number,
                page.total_pages,
                app.contacts.len(),
                unread
            ),
            Style::default().fg(theme::TEXT_DIM),
        ))),
        chunks[3],
    );

    if screen.controls.confirm_delete.is_some() {
        render_confirm_dialog(
            f,
            area,
            "Delete message",
            "Delete this message? This cannot be undone.",
        );
    }
}

fn render_message_list(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.contacts_screen;
    let (rows, _) = app.contacts_page();

    if screen.controls.loading && app.contacts.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading messages...",
                Style::default().fg(theme::TEXT_MUTED),
            ))),
            area,
        );
        return;
    }

    if rows.is_empty() {
        let message = if app.contacts.is_empty() {
            "No contact messages yet."
        } else {
            "No messages match the current search and filter."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(theme::TEXT_MUTED),
            ))),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, contact)| {
            let is_cursor = i == screen.controls.cursor;
            let is_open = screen.selected_id == Some(contact.id);

            let (icon, icon_style) = if contact.read {
                ("○ ", Style::default().fg(theme::TEXT_DIM))
            } else {
                ("● ", Style::default().fg(theme::ACCENT_PRIMARY))
            };
            let name_style = if contact.read {
                Style::default().fg(theme::TEXT_PRIMARY)
            } else {
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            };

            let mut spans = vec![
                Span::styled(if is_cursor { "▌" } else { " " }, Style::default().fg(theme::ACCENT_PRIMARY)),
                Span::styled(icon, icon_style),
                Span::styled(format!("{:<16}", truncate(&contact.name, 16)), name_style),
                Span::styled(
                    truncate(&contact.subject, 24),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
            ];
            if is_open {
                spans.push(Span::styled(
                    "  ◂",
                    Style::default().fg(theme::ACCENT_SUCCESS),
                ));
            }

            let mut item = ListItem::new(Line::from(spans));
            if is_cursor {
                item = item.style(Style::default().bg(theme::BG_SELECTED));
            }
            item
        })
        .collect();
    f.render_widget(List::new(items), area);
}

fn render_detail_pane(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme::BORDER_INACTIVE));
    let inner = block.inner(area);
    f.render_widget(block, area);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let Some(contact) = app.selected_contact() else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Select a message to read it.",
                Style::default().fg(theme::TEXT_DIM),
            ))),
            inner,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                contact.name.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if contact.read { "" } else { "  (unread)" },
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
        ]),
        Line::from(Span::styled(
            contact.email.clone(),
            Style::default().fg(theme::ACCENT_PRIMARY),
        )),
        Line::from(Span::styled(
            contact.created_at_display(),
            Style::default().fg(theme::TEXT_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Subject: {}", contact.subject),
            Style::default().fg(theme::TEXT_MUTED),
        )),
        Line::from(""),
    ];
    for line in contact.message.lines() {
        lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
