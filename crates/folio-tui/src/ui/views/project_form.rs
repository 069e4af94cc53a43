use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use folio_core::models::ProjectField;

use crate::ui::components::{render_hints, render_text_field};
use crate::ui::state::{FormMode, FormPhase, ProjectFormFocus};
use crate::ui::{theme, App};

pub fn render_project_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.project_form else {
        return;
    };

    let title = match form.mode {
        FormMode::Create => "Create Project",
        FormMode::Edit(_) => "Edit Project",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let body = Rect::new(
        area.x + 2,
        area.y + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(3),
    );

    match &form.phase {
        FormPhase::Loading => {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Loading project...",
                    Style::default().fg(theme::TEXT_MUTED),
                ))),
                body,
            );
            return;
        }
        FormPhase::LoadFailed(message) => {
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("Failed to load project: {message}"),
                        Style::default().fg(theme::ACCENT_ERROR),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press Esc to go back.",
                        Style::default().fg(theme::TEXT_MUTED),
                    )),
                ]),
                body,
            );
            return;
        }
        FormPhase::Editing | FormPhase::Submitting => {}
    }

    let mut y = body.y;
    let width = body.width;

    render_text_field(
        f,
        Rect::new(body.x, y, width, 3),
        "Title *",
        &form.draft.title,
        form.focus == ProjectFormFocus::Title,
        false,
        "project title",
        form.field_error(ProjectField::Title),
    );
    y += 3;

    // Description renders its tail lines so the cursor row stays visible
    let desc_label_style = if form.focus == ProjectFormFocus::Description {
        theme::label_focused()
    } else {
        theme::label_blurred()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("Description *", desc_label_style))),
        Rect::new(body.x, y, width, 1),
    );
    y += 1;
    let desc_lines: Vec<&str> = form.draft.description.lines().collect();
    let visible = 3usize;
    let start = desc_lines.len().saturating_sub(visible);
    let bar_color = if form.focus == ProjectFormFocus::Description {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    if desc_lines.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("│ ", Style::default().fg(bar_color)),
                Span::styled("project description", Style::default().fg(theme::TEXT_DIM)),
            ])),
            Rect::new(body.x, y, width, 1),
        );
        y += 1;
    } else {
        for line in &desc_lines[start..] {
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("│ ", Style::default().fg(bar_color)),
                    Span::styled(line.to_string(), Style::default().fg(theme::TEXT_PRIMARY)),
                ])),
                Rect::new(body.x, y, width, 1),
            );
            y += 1;
        }
    }
    if let Some(error) = form.field_error(ProjectField::Description) {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("* {error}"),
                Style::default().fg(theme::ACCENT_ERROR),
            ))),
            Rect::new(body.x, y, width, 1),
        );
        y += 1;
    }
    y += 1;

    render_text_field(
        f,
        Rect::new(body.x, y, width, 2),
        "Image URL",
        &form.draft.image,
        form.focus == ProjectFormFocus::Image,
        false,
        "(optional)",
        None,
    );
    y += 3;

    render_text_field(
        f,
        Rect::new(body.x, y, width, 3),
        "Demo URL",
        &form.draft.demo_url,
        form.focus == ProjectFormFocus::DemoUrl,
        false,
        "https://...",
        form.field_error(ProjectField::DemoUrl),
    );
    y += 3;

    render_text_field(
        f,
        Rect::new(body.x, y, width, 3),
        "Repository URL",
        &form.draft.repo_url,
        form.focus == ProjectFormFocus::RepoUrl,
        false,
        "https://github.com/...",
        form.field_error(ProjectField::RepoUrl),
    );
    y += 3;

    // Featured checkbox
    let featured_style = if form.focus == ProjectFormFocus::Featured {
        theme::label_focused()
    } else {
        theme::label_blurred()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                if form.draft.featured { "[x] " } else { "[ ] " },
                featured_style,
            ),
            Span::styled("Featured project", featured_style),
        ])),
        Rect::new(body.x, y, width, 1),
    );
    y += 2;

    // Tags: chips, input, suggestions
    let tags_label_style = if form.focus == ProjectFormFocus::Tags {
        theme::label_focused()
    } else {
        theme::label_blurred()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("Tags", tags_label_style))),
        Rect::new(body.x, y, width, 1),
    );
    y += 1;

    let mut chip_spans = Vec::new();
    for tag in &form.draft.tags {
        chip_spans.push(Span::styled(
            format!(" {tag} "),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .bg(theme::BG_SELECTED),
        ));
        chip_spans.push(Span::raw(" "));
    }
    let input_display = if form.tag_input.is_empty() {
        Span::styled(
            "type to add a tag",
            Style::default().fg(theme::TEXT_DIM),
        )
    } else {
        Span::styled(
            form.tag_input.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )
    };
    chip_spans.push(input_display);
    f.render_widget(
        Paragraph::new(Line::from(chip_spans)),
        Rect::new(body.x, y, width, 1),
    );
    y += 1;

    if form.focus == ProjectFormFocus::Tags {
        let suggestions = form.suggestions(app.tags.items());
        for (i, name) in suggestions.iter().take(4).enumerate() {
            let style = if i == form.suggestion {
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(format!("  {name}"), style))),
                Rect::new(body.x, y, width, 1),
            );
            y += 1;
        }
    }
    y += 1;

    if let Some(error) = &form.submit_error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default()
                    .fg(theme::ACCENT_ERROR)
                    .add_modifier(Modifier::BOLD),
            ))),
            Rect::new(body.x, y, width, 1),
        );
    }

    let hints_area = Rect::new(
        area.x + 2,
        area.y + area.height.saturating_sub(1),
        area.width.saturating_sub(4),
        1,
    );
    if form.phase == FormPhase::Submitting {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Saving...",
                Style::default().fg(theme::ACCENT_PRIMARY),
            ))),
            hints_area,
        );
    } else {
        render_hints(
            f,
            hints_area,
            &[
                ("Tab", "next field"),
                ("Enter", "add tag / next"),
                ("Space", "toggle featured"),
                ("Ctrl+S", "save"),
                ("Esc", "cancel"),
            ],
        );
    }
}
