use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::models::SkillField;

use crate::ui::components::{centered_rect, render_hints, render_text_field};
use crate::ui::state::{FormMode, SkillFormFocus};
use crate::ui::{theme, App};

/// Modal create/edit form over the skills list.
pub fn render_skill_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.skill_form else {
        return;
    };

    let popup = centered_rect(area, 48, 14);
    f.render_widget(Clear, popup);
    let title = match form.mode {
        FormMode::Create => " New Skill ",
        FormMode::Edit(_) => " Edit Skill ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(title)
        .style(Style::default().bg(theme::BG_MODAL));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let body = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    let mut y = body.y;

    render_text_field(
        f,
        Rect::new(body.x, y, body.width, 3),
        "Name *",
        &form.draft.name,
        form.focus == SkillFormFocus::Name,
        false,
        "skill name",
        form.field_error(SkillField::Name),
    );
    y += 3;

    render_text_field(
        f,
        Rect::new(body.x, y, body.width, 3),
        "Level (1-100) *",
        &form.draft.level,
        form.focus == SkillFormFocus::Level,
        false,
        "50",
        form.field_error(SkillField::Level),
    );
    y += 3;

    let category_style = if form.focus == SkillFormFocus::Category {
        theme::label_focused()
    } else {
        theme::label_blurred()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Category  ", category_style),
            Span::styled(
                format!("◂ {} ▸", form.draft.category.label()),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ])),
        Rect::new(body.x, y, body.width, 1),
    );
    y += 2;

    if form.submitting {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Saving...",
                Style::default().fg(theme::ACCENT_PRIMARY),
            ))),
            Rect::new(body.x, y, body.width, 1),
        );
    } else if let Some(error) = &form.submit_error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default()
                    .fg(theme::ACCENT_ERROR)
                    .add_modifier(Modifier::BOLD),
            ))),
            Rect::new(body.x, y, body.width, 1),
        );
    }

    let hints_area = Rect::new(
        popup.x + 2,
        popup.y + popup.height.saturating_sub(2),
        popup.width.saturating_sub(4),
        1,
    );
    render_hints(
        f,
        hints_area,
        &[
            ("Tab", "next field"),
            ("Space", "cycle category"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
    );
}
