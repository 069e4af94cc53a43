//! Small shared widgets: centered dialogs, labeled inputs, hint bars and
//! the toast line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::notifications::Notification;
use crate::ui::theme;

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Yes/no confirmation dialog drawn over the current screen.
pub fn render_confirm_dialog(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup = centered_rect(area, 52, 7);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_ERROR))
        .title(format!(" {title} "))
        .style(Style::default().bg(theme::BG_MODAL));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(theme::TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme::hint_key()),
            Span::styled(" confirm · ", theme::hint_text()),
            Span::styled("n", theme::hint_key()),
            Span::styled(" cancel", theme::hint_text()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}

/// Labeled single-line input. Uses two rows (label, value) plus an error
/// row when `area.height >= 3` and an error is present.
#[allow(clippy::too_many_arguments)]
pub fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
    placeholder: &str,
    error: Option<&str>,
) {
    let label_style = if focused {
        theme::label_focused()
    } else {
        theme::label_blurred()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label.to_string(), label_style))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let bar_color = if focused {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    let (text, text_style) = if shown.is_empty() {
        (
            placeholder.to_string(),
            Style::default().fg(theme::TEXT_DIM),
        )
    } else {
        (shown.clone(), Style::default().fg(theme::TEXT_PRIMARY))
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("│ ", Style::default().fg(bar_color)),
            Span::styled(text, text_style),
        ])),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );

    if focused {
        let cursor_x = area.x + 2 + shown.width() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y + 1));
    }

    if let Some(error) = error {
        if area.height >= 3 {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("* {error}"),
                    Style::default().fg(theme::ACCENT_ERROR),
                ))),
                Rect::new(area.x, area.y + 2, area.width, 1),
            );
        }
    }
}

/// Key/action hint bar.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme::hint_text()));
        }
        spans.push(Span::styled(key.to_string(), theme::hint_key()));
        spans.push(Span::styled(format!(" {action}"), theme::hint_text()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One-line toast at the bottom edge.
pub fn render_toast(f: &mut Frame, area: Rect, notification: &Notification) {
    use crate::ui::notifications::NotificationLevel;
    let color = match notification.level {
        NotificationLevel::Info => theme::ACCENT_PRIMARY,
        NotificationLevel::Success => theme::ACCENT_SUCCESS,
        NotificationLevel::Error => theme::ACCENT_ERROR,
    };
    let line = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    f.render_widget(Clear, line);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} {}", notification.level.icon(), notification.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))),
        line,
    );
}

/// Search/filter status line shown above every list screen.
pub fn render_list_controls_line(
    f: &mut Frame,
    area: Rect,
    search: &str,
    searching: bool,
    filter_label: &str,
) {
    let mut spans = vec![Span::styled("/ ", theme::hint_key())];
    if search.is_empty() && !searching {
        spans.push(Span::styled(
            "search",
            Style::default().fg(theme::TEXT_DIM),
        ));
    } else {
        spans.push(Span::styled(
            search.to_string(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
    }
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT_PRIMARY)));
    }
    spans.push(Span::styled(
        format!("   filter: {filter_label}"),
        Style::default().fg(theme::TEXT_MUTED),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
