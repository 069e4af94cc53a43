use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::components::{render_hints, render_text_field};
use crate::ui::state::LoginFocus;
use crate::ui::{theme, App};

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let login = &app.login;
    let card = crate::ui::components::centered_rect(area, 54, 14);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_INACTIVE))
        .title(" Admin Login ");
    let inner = block.inner(card);
    f.render_widget(block, card);

    let mut y = inner.y;
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sign in to manage the portfolio",
            Style::default().fg(theme::TEXT_MUTED),
        )))
        .alignment(Alignment::Center),
        Rect::new(inner.x, y, inner.width, 1),
    );
    y += 2;

    if login.checking {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Checking authentication...",
                Style::default().fg(theme::ACCENT_PRIMARY),
            )))
            .alignment(Alignment::Center),
            Rect::new(inner.x, y + 2, inner.width, 1),
        );
        return;
    }

    render_text_field(
        f,
        Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 2),
        "Username",
        &login.username,
        login.focus == LoginFocus::Username,
        false,
        "admin username",
        None,
    );
    y += 3;

    render_text_field(
        f,
        Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 2),
        "Password",
        &login.password,
        login.focus == LoginFocus::Password,
        true,
        "••••••••",
        None,
    );
    y += 3;

    if login.submitting {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Signing in...",
                Style::default().fg(theme::ACCENT_PRIMARY),
            )))
            .alignment(Alignment::Center),
            Rect::new(inner.x, y, inner.width, 1),
        );
    } else if let Some(error) = &login.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default()
                    .fg(theme::ACCENT_ERROR)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    let hints_area = Rect::new(
        card.x + 2,
        card.y + card.height.saturating_sub(1),
        card.width.saturating_sub(4),
        1,
    );
    render_hints(
        f,
        hints_area,
        &[("Tab", "switch field"), ("Enter", "sign in"), ("Esc", "quit")],
    );
}
