use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::ui::components::{render_confirm_dialog, render_list_controls_line};
use crate::ui::{theme, App};

pub fn render_projects(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.projects_screen;
    let chunks = Layout::vertical([
        Constraint::Length(1), // search/filter line
        Constraint::Length(1), // spacing / error banner
        Constraint::Min(0),    // list
        Constraint::Length(1), // page indicator
    ])
    .split(area);

    render_list_controls_line(
        f,
        chunks[0],
        &screen.controls.search,
        screen.controls.searching,
        &screen.filter.label(),
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

    let (rows, page) = app.projects_page();

    if screen.controls.loading && app.projects.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading projects...",
                Style::default().fg(theme::TEXT_MUTED),
            ))),
            chunks[2],
        );
    } else if rows.is_empty() {
        let message = if app.projects.is_empty() {
            "No projects found. Press n to create your first project."
        } else {
            "No projects match the current search and filter."
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
            .map(|(i, project)| {
                let is_cursor = i == screen.controls.cursor;
                let marker = if is_cursor { "▌ " } else { "  " };
                let title_style = if is_cursor {
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TEXT_PRIMARY)
                };

                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(theme::ACCENT_PRIMARY)),
                    Span::styled(format!("{:<28}", truncate(&project.title, 28)), title_style),
                ];
                if project.featured {
                    spans.push(Span::styled(
                        "★ featured  ",
                        Style::default().fg(theme::ACCENT_SUCCESS),
                    ));
                } else {
                    spans.push(Span::styled("            ", Style::default()));
                }
                for tag in project.tags.iter().take(3) {
                    spans.push(Span::styled(
                        format!("[{tag}] "),
                        Style::default().fg(theme::TEXT_MUTED),
                    ));
                }
                if project.tags.len() > 3 {
                    spans.push(Span::styled(
                        format!("+{}", project.tags.len() - 3),
                        Style::default().fg(theme::TEXT_DIM),
                    ));
                }

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
                "page {}/{} · {} project(s)",
                page.number,
                page.total_pages,
                app.projects_view().len()
            ),
            Style::default().fg(theme::TEXT_DIM),
        ))),
        chunks[3],
    );

    if screen.controls.confirm_delete.is_some() {
        render_confirm_dialog(
            f,
            area,
            "Delete project",
            "Are you sure you want to delete this project?",
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
