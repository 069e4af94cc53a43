use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::{render_hints, render_toast};
use crate::ui::views;
use crate::ui::{theme, AdminTab, App, View};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        area,
    );

    match app.view {
        View::Login => views::login::render_login(f, app, area),
        View::ProjectForm => views::project_form::render_project_form(f, app, area),
        View::Admin => render_admin(f, app, area),
    }

    if let Some(notification) = app.notifications.current() {
        render_toast(f, area, notification);
    }
}

fn render_admin(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // tab bar
        Constraint::Min(0),    // content
        Constraint::Length(1), // hints
    ])
    .split(area);

    render_tab_bar(f, app, chunks[0]);

    let content = Rect::new(
        chunks[1].x + 2,
        chunks[1].y,
        chunks[1].width.saturating_sub(4),
        chunks[1].height,
    );
    match app.tab {
        AdminTab::Projects => views::projects::render_projects(f, app, content),
        AdminTab::Skills => views::skills::render_skills(f, app, content),
        AdminTab::Messages => views::contacts::render_contacts(f, app, content),
    }

    render_admin_hints(f, app, chunks[2]);

    if app.skill_form.is_some() {
        views::skill_form::render_skill_form(f, app, area);
    }
}

fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let tab_style = |tab: AdminTab| {
        if app.tab == tab {
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        }
    };

    let unread = app.unread_count();
    let messages_label = if unread > 0 {
        format!("[3] Messages ({unread})")
    } else {
        "[3] Messages".to_string()
    };

    let spans = vec![
        Span::styled(
            "  folio",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("    ", Style::default()),
        Span::styled("[1] Projects", tab_style(AdminTab::Projects)),
        Span::styled("   ", Style::default()),
        Span::styled("[2] Skills", tab_style(AdminTab::Skills)),
        Span::styled("   ", Style::default()),
        Span::styled(messages_label, tab_style(AdminTab::Messages)),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_admin_hints(f: &mut Frame, app: &App, area: Rect) {
    let area = Rect::new(area.x + 2, area.y, area.width.saturating_sub(4), 1);
    match app.tab {
        AdminTab::Projects | AdminTab::Skills => render_hints(
            f,
            area,
            &[
                ("/", "search"),
                ("f", "filter"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("r", "refresh"),
                ("←→", "page"),
                ("x", "logout"),
                ("q", "quit"),
            ],
        ),
        AdminTab::Messages => render_hints(
            f,
            area,
            &[
                ("/", "search"),
                ("f", "filter"),
                ("Enter", "open"),
                ("d", "delete"),
                ("r", "refresh"),
                ("←→", "page"),
                ("x", "logout"),
                ("q", "quit"),
            ],
        ),
    }
}
