use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::ui::components::{render_confirm_dialog, render_list_controls_line};
use crate::ui::{theme, App};

const LEVEL_BAR_WIDTH: usize = 10;

pub fn render_skills(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.skills_screen;
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

    let (rows, page) = app.skills_page();

    if screen.controls.loading && app.skills.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading skills...",
                Style::default().fg(theme::TEXT_MUTED),
            ))),
            chunks[2],
        );
    } else if rows.is_empty() {
        let message = if app.skills.is_empty() {
            "No skills yet. Press n to add one."
        } else {
            "No skills match the current search and filter."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(theme::TEXT_MUTED),
            ))),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let is_cursor = i == screen.controls.cursor;
                let marker = if is_cursor { "▌ " } else { "  " };
                let name_style = if is_cursor {
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TEXT_PRIMARY)
                };

                let filled = (skill.level as usize * LEVEL_BAR_WIDTH)
                    .div_ceil(100)
                    .min(LEVEL_BAR_WIDTH);
                let bar = format!(
                    "{}{}",
                    "█".repeat(filled),
                    "░".repeat(LEVEL_BAR_WIDTH - filled)
                );

                let spans = vec![
                    Span::styled(marker, Style::default().fg(theme::ACCENT_PRIMARY)),
                    Span::styled(format!("{:<22}", skill.name), name_style),
                    Span::styled(bar, Style::default().fg(theme::ACCENT_SUCCESS)),
                    Span::styled(
                        format!(" {:>3}  ", skill.level),
                        Style::default().fg(theme::TEXT_MUTED),
                    ),
                    Span::styled(
                        skill.category.label(),
                        Style::default().fg(theme::TEXT_MUTED),
                    ),
                ];

                let mut item = ListItem::new(Line::from(spans));
                if is_cursor {
                    item = item.style(Style::default().bg(theme::BG_SELECTED));
                }
                item
            })
            .collect();
        f.render_widget(List::new(items), chunks[2]);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "page {}/{} · {} skill(s)",
                page.number,
                page.total_pages,
                app.skills_view().len()
            ),
            Style::default().fg(theme::TEXT_DIM),
        ))),
        chunks[3],
    );

    if screen.controls.confirm_delete.is_some() {
        render_confirm_dialog(
            f,
            area,
            "Delete skill",
            "Are you sure you want to delete this skill?",
        );
    }
}
