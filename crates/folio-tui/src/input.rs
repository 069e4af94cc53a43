use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::state::{
    FormPhase, ListControls, ProjectFormFocus, SkillFormFocus,
};
use crate::ui::{AdminTab, App, View};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Login => handle_login_key(app, key),
        View::ProjectForm => handle_project_form_key(app, key),
        View::Admin => handle_admin_key(app, key),
    }
}

fn controls_mut(app: &mut App) -> &mut ListControls {
    match app.tab {
        AdminTab::Projects => &mut app.projects_screen.controls,
        AdminTab::Skills => &mut app.skills_screen.controls,
        AdminTab::Messages => &mut app.contacts_screen.controls,
    }
}

fn controls(app: &App) -> &ListControls {
    match app.tab {
        AdminTab::Projects => &app.projects_screen.controls,
        AdminTab::Skills => &app.skills_screen.controls,
        AdminTab::Messages => &app.contacts_screen.controls,
    }
}

fn current_page(app: &App) -> (usize, usize) {
    let page = match app.tab {
        AdminTab::Projects => app.projects_page().1,
        AdminTab::Skills => app.skills_page().1,
        AdminTab::Messages => app.contacts_page().1,
    };
    (page.end - page.start, page.total_pages)
}

// ===== Login =====

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if app.login.checking || app.login.submitting {
        return;
    }
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus();
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => {
            app.login.focused_value_mut().pop();
        }
        KeyCode::Char(c) => {
            app.login.focused_value_mut().push(c);
            app.login.error = None;
        }
        _ => {}
    }
}

// ===== Admin list screens =====

fn handle_admin_key(app: &mut App, key: KeyEvent) {
    if app.skill_form.is_some() {
        handle_skill_form_key(app, key);
        return;
    }
    if controls(app).confirm_delete.is_some() {
        handle_confirm_delete_key(app, key);
        return;
    }
    if controls(app).searching {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('x') => app.logout(),
        KeyCode::Esc => app.notifications.dismiss(),
        KeyCode::Char('1') => app.tab = AdminTab::Projects,
        KeyCode::Char('2') => app.tab = AdminTab::Skills,
        KeyCode::Char('3') => app.tab = AdminTab::Messages,
        KeyCode::Tab => {
            app.tab = match app.tab {
                AdminTab::Projects => AdminTab::Skills,
                AdminTab::Skills => AdminTab::Messages,
                AdminTab::Messages => AdminTab::Projects,
            };
        }
        KeyCode::Char('/') => controls_mut(app).searching = true,
        KeyCode::Char('f') => cycle_filter(app),
        KeyCode::Char('r') => match app.tab {
            AdminTab::Projects => {
                app.refresh_projects();
                app.refresh_tags();
            }
            AdminTab::Skills => app.refresh_skills(),
            AdminTab::Messages => app.refresh_contacts(),
        },
        KeyCode::Up | KeyCode::Char('k') => {
            let screen = controls_mut(app);
            screen.cursor = screen.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let (rows, _) = current_page(app);
            let screen = controls_mut(app);
            if rows > 0 {
                screen.cursor = (screen.cursor + 1).min(rows - 1);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let screen = controls_mut(app);
            if screen.page > 1 {
                screen.page -= 1;
                screen.cursor = 0;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let (_, total_pages) = current_page(app);
            let screen = controls_mut(app);
            if screen.page < total_pages {
                screen.page += 1;
                screen.cursor = 0;
            }
        }
        KeyCode::Char('n') => match app.tab {
            AdminTab::Projects => app.open_project_create(),
            AdminTab::Skills => app.open_skill_create(),
            AdminTab::Messages => {}
        },
        KeyCode::Char('e') => match app.tab {
            AdminTab::Projects => {
                if let Some(id) = app.cursor_project_id() {
                    app.open_project_edit(id);
                }
            }
            AdminTab::Skills => app.open_skill_edit(),
            AdminTab::Messages => {}
        },
        KeyCode::Char('d') => {
            let target = match app.tab {
                AdminTab::Projects => app.cursor_project_id(),
                AdminTab::Skills => app.cursor_skill().map(|s| s.id),
                AdminTab::Messages => app.cursor_contact_id(),
            };
            if target.is_some() && !controls(app).mutating {
                controls_mut(app).confirm_delete = target;
            }
        }
        KeyCode::Enter => {
            if app.tab == AdminTab::Messages {
                if let Some(id) = app.cursor_contact_id() {
                    app.open_contact(id);
                }
            }
        }
        _ => {}
    }
}

fn cycle_filter(app: &mut App) {
    match app.tab {
        AdminTab::Projects => app.cycle_project_filter(),
        AdminTab::Skills => {
            app.skills_screen.filter = app.skills_screen.filter.next();
            app.skills_screen.controls.reset_view();
        }
        AdminTab::Messages => {
            app.contacts_screen.filter = app.contacts_screen.filter.next();
            app.contacts_screen.controls.reset_view();
        }
    }
    app.sync_list_windows();
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => controls_mut(app).searching = false,
        KeyCode::Backspace => {
            let screen = controls_mut(app);
            screen.search.pop();
            screen.reset_view();
        }
        KeyCode::Char(c) => {
            let screen = controls_mut(app);
            screen.search.push(c);
            screen.reset_view();
        }
        _ => {}
    }
}

fn handle_confirm_delete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => match app.tab {
            AdminTab::Projects => app.confirm_delete_project(),
            AdminTab::Skills => app.confirm_delete_skill(),
            AdminTab::Messages => app.confirm_delete_contact(),
        },
        KeyCode::Char('n') | KeyCode::Esc => controls_mut(app).confirm_delete = None,
        _ => {}
    }
}

// ===== Project form =====

fn handle_project_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.project_form.as_mut() else {
        app.view = View::Admin;
        return;
    };

    match form.phase {
        FormPhase::Loading => {
            if key.code == KeyCode::Esc {
                app.close_project_form();
            }
            return;
        }
        FormPhase::LoadFailed(_) => {
            if key.code == KeyCode::Esc || key.code == KeyCode::Enter {
                app.close_project_form();
            }
            return;
        }
        // Submit control is disabled while the request is in flight
        FormPhase::Submitting => return,
        FormPhase::Editing => {}
    }

    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.submit_project_form();
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_project_form(),
        KeyCode::Tab => form.focus = form.focus.next(),
        KeyCode::BackTab => form.focus = form.focus.prev(),
        KeyCode::Up => {
            if form.focus == ProjectFormFocus::Tags {
                form.suggestion = form.suggestion.saturating_sub(1);
            } else {
                form.focus = form.focus.prev();
            }
        }
        KeyCode::Down => {
            if form.focus == ProjectFormFocus::Tags {
                let count = form.suggestions(app.tags.items()).len();
                if count > 0 {
                    form.suggestion = (form.suggestion + 1).min(count - 1);
                }
            } else {
                form.focus = form.focus.next();
            }
        }
        KeyCode::Enter => match form.focus {
            ProjectFormFocus::Tags => {
                let tags: Vec<_> = app.tags.items().to_vec();
                form.commit_tag(&tags);
            }
            // The description is the one multi-line field
            ProjectFormFocus::Description => form.enter_char('\n'),
            _ => form.focus = form.focus.next(),
        },
        KeyCode::Char(' ') if form.focus == ProjectFormFocus::Featured => {
            form.draft.featured = !form.draft.featured;
        }
        KeyCode::Char(c) => form.enter_char(c),
        KeyCode::Backspace => form.backspace(),
        _ => {}
    }
}

// ===== Skill form (modal) =====

fn handle_skill_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.skill_form.as_mut() else {
        return;
    };
    if form.submitting {
        return;
    }

    match key.code {
        KeyCode::Esc => app.skill_form = None,
        KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.next().next();
        }
        KeyCode::Enter => app.submit_skill_form(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if form.focus == SkillFormFocus::Category =>
        {
            form.draft.category = form.draft.category.next();
        }
        KeyCode::Char(c) => form.enter_char(c),
        KeyCode::Backspace => form.backspace(),
        _ => {}
    }
}
