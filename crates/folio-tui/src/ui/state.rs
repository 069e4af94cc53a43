//! Per-screen state: search/filter/page controls for the list screens and
//! the create-or-edit form machines.
//!
//! Search terms, filters and page numbers are ephemeral; nothing here is
//! persisted across runs.

use folio_core::models::{
    Project, ProjectDraft, ProjectField, Skill, SkillDraft, SkillField, Tag,
};
use folio_core::search::{text_contains_term, ContactFilter, ProjectFilter, SkillFilter};

/// Shared controls for a paginated, searchable list screen.
#[derive(Debug, Default)]
pub struct ListControls {
    pub search: String,
    /// True while keystrokes go to the search box.
    pub searching: bool,
    /// Requested 1-based page; clamped by the pager when the view shrinks.
    pub page: usize,
    /// Cursor row within the visible page.
    pub cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Stamp for in-flight list requests; stale responses are dropped.
    pub epoch: u64,
    /// Target of a pending delete confirmation, if any.
    pub confirm_delete: Option<i64>,
    /// A mutation is in flight; further mutations are ignored until it
    /// settles.
    pub mutating: bool,
}

impl ListControls {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    /// Any search/filter change resets paging and the cursor.
    pub fn reset_view(&mut self) {
        self.page = 1;
        self.cursor = 0;
    }

    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

#[derive(Debug)]
pub struct ProjectsScreen {
    pub controls: ListControls,
    pub filter: ProjectFilter,
}

impl ProjectsScreen {
    pub fn new() -> Self {
        Self {
            controls: ListControls::new(),
            filter: ProjectFilter::All,
        }
    }
}

/// Cycle all -> featured -> tag:<each fetched tag> -> all.
pub fn next_project_filter(current: &ProjectFilter, tags: &[Tag]) -> ProjectFilter {
    match current {
        ProjectFilter::All => ProjectFilter::Featured,
        ProjectFilter::Featured => match tags.first() {
            Some(tag) => ProjectFilter::Tag(tag.name.clone()),
            None => ProjectFilter::All,
        },
        ProjectFilter::Tag(name) => {
            let idx = tags.iter().position(|t| t.name == *name);
            match idx.and_then(|i| tags.get(i + 1)) {
                Some(tag) => ProjectFilter::Tag(tag.name.clone()),
                None => ProjectFilter::All,
            }
        }
    }
}

#[derive(Debug)]
pub struct SkillsScreen {
    pub controls: ListControls,
    pub filter: SkillFilter,
}

impl SkillsScreen {
    pub fn new() -> Self {
        Self {
            controls: ListControls::new(),
            filter: SkillFilter::All,
        }
    }
}

#[derive(Debug)]
pub struct ContactsScreen {
    pub controls: ListControls,
    pub filter: ContactFilter,
    /// Contact shown in the detail pane.
    pub selected_id: Option<i64>,
    /// Mark-read mutation currently in flight for this contact id.
    pub mark_read_in_flight: Option<i64>,
}

impl ContactsScreen {
    pub fn new() -> Self {
        Self {
            controls: ListControls::new(),
            filter: ContactFilter::All,
            selected_id: None,
            mark_read_in_flight: None,
        }
    }
}

// ===== Login =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Password,
}

#[derive(Debug)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    pub focus: LoginFocus,
    pub submitting: bool,
    /// Startup probe of a restored token is in flight.
    pub checking: bool,
    pub error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginFocus::Username,
            submitting: false,
            checking: false,
            error: None,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Username,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginFocus::Username => &mut self.username,
            LoginFocus::Password => &mut self.password,
        }
    }
}

// ===== Create-or-edit forms =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Form lifecycle. `Loading` only occurs in edit mode while the existing
/// record is fetched; a failed fetch is terminal (`LoadFailed`), never a
/// silent fallback to create mode.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Loading,
    Editing,
    Submitting,
    LoadFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormFocus {
    Title,
    Description,
    Image,
    DemoUrl,
    RepoUrl,
    Featured,
    Tags,
}

impl ProjectFormFocus {
    const ORDER: [ProjectFormFocus; 7] = [
        ProjectFormFocus::Title,
        ProjectFormFocus::Description,
        ProjectFormFocus::Image,
        ProjectFormFocus::DemoUrl,
        ProjectFormFocus::RepoUrl,
        ProjectFormFocus::Featured,
        ProjectFormFocus::Tags,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct ProjectForm {
    pub mode: FormMode,
    pub phase: FormPhase,
    pub draft: ProjectDraft,
    pub focus: ProjectFormFocus,
    pub field_errors: Vec<(ProjectField, String)>,
    /// Generic slot for server-side submit failures; field errors are
    /// never inferred from it.
    pub submit_error: Option<String>,
    pub tag_input: String,
    /// Highlighted row in the suggestion list.
    pub suggestion: usize,
}

impl ProjectForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Editing,
            draft: ProjectDraft::default(),
            focus: ProjectFormFocus::Title,
            field_errors: Vec::new(),
            submit_error: None,
            tag_input: String::new(),
            suggestion: 0,
        }
    }

    pub fn edit(id: i64) -> Self {
        Self {
            mode: FormMode::Edit(id),
            phase: FormPhase::Loading,
            ..Self::create()
        }
    }

    pub fn is_editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub fn field_error(&self, field: ProjectField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    /// Typing into a field clears its annotation, like the original form.
    pub fn clear_field_error(&mut self, field: ProjectField) {
        self.field_errors.retain(|(f, _)| *f != field);
    }

    fn focused_text_mut(&mut self) -> Option<(&mut String, Option<ProjectField>)> {
        match self.focus {
            ProjectFormFocus::Title => Some((&mut self.draft.title, Some(ProjectField::Title))),
            ProjectFormFocus::Description => {
                Some((&mut self.draft.description, Some(ProjectField::Description)))
            }
            ProjectFormFocus::Image => Some((&mut self.draft.image, None)),
            ProjectFormFocus::DemoUrl => {
                Some((&mut self.draft.demo_url, Some(ProjectField::DemoUrl)))
            }
            ProjectFormFocus::RepoUrl => {
                Some((&mut self.draft.repo_url, Some(ProjectField::RepoUrl)))
            }
            ProjectFormFocus::Featured => None,
            ProjectFormFocus::Tags => Some((&mut self.tag_input, None)),
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if !self.is_editable() {
            return;
        }
        if let Some((value, field)) = self.focused_text_mut() {
            value.push(c);
            if let Some(field) = field {
                self.clear_field_error(field);
            }
            if self.focus == ProjectFormFocus::Tags {
                self.suggestion = 0;
            }
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editable() {
            return;
        }
        // Backspace on an empty tag input removes the last tag chip
        if self.focus == ProjectFormFocus::Tags && self.tag_input.is_empty() {
            self.draft.remove_last_tag();
            return;
        }
        if let Some((value, _)) = self.focused_text_mut() {
            value.pop();
            if self.focus == ProjectFormFocus::Tags {
                self.suggestion = 0;
            }
        }
    }

    /// Reference tags matching the current input (case-insensitive
    /// substring), minus tags the draft already carries.
    pub fn suggestions<'a>(&self, tags: &'a [Tag]) -> Vec<&'a str> {
        if self.tag_input.trim().is_empty() {
            return Vec::new();
        }
        tags.iter()
            .map(|t| t.name.as_str())
            .filter(|name| text_contains_term(name, self.tag_input.trim()))
            .filter(|name| !self.draft.tags.iter().any(|t| t == name))
            .collect()
    }

    /// Commit the tag input: the highlighted suggestion when one exists,
    /// the raw text otherwise. Duplicates are silently ignored upstream.
    pub fn commit_tag(&mut self, tags: &[Tag]) {
        let suggestions = self.suggestions(tags);
        let chosen = suggestions
            .get(self.suggestion)
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.tag_input.trim().to_string());
        self.draft.add_tag(&chosen);
        self.tag_input.clear();
        self.suggestion = 0;
    }

    /// Client-side validation gate. Returns true when the form may be
    /// submitted; otherwise annotates the offending fields and stays
    /// editable.
    pub fn begin_submit(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return false;
        }
        self.field_errors.clear();
        self.submit_error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    /// Server rejected the submit: back to editing with the message in the
    /// generic slot, user input intact.
    pub fn submit_failed(&mut self, message: String) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
            self.submit_error = Some(message);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillFormFocus {
    Name,
    Level,
    Category,
}

impl SkillFormFocus {
    pub fn next(self) -> Self {
        match self {
            SkillFormFocus::Name => SkillFormFocus::Level,
            SkillFormFocus::Level => SkillFormFocus::Category,
            SkillFormFocus::Category => SkillFormFocus::Name,
        }
    }
}

/// Modal skill form. Edit mode seeds from the cached record (the API has
/// no skill detail endpoint), so there is no loading phase.
#[derive(Debug)]
pub struct SkillForm {
    pub mode: FormMode,
    pub draft: SkillDraft,
    pub focus: SkillFormFocus,
    pub submitting: bool,
    pub field_errors: Vec<(SkillField, String)>,
    pub submit_error: Option<String>,
}

impl SkillForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: SkillDraft::default(),
            focus: SkillFormFocus::Name,
            submitting: false,
            field_errors: Vec::new(),
            submit_error: None,
        }
    }

    pub fn edit(skill: &Skill) -> Self {
        Self {
            mode: FormMode::Edit(skill.id),
            draft: SkillDraft::from_skill(skill),
            ..Self::create()
        }
    }

    pub fn field_error(&self, field: SkillField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn enter_char(&mut self, c: char) {
        if self.submitting {
            return;
        }
        match self.focus {
            SkillFormFocus::Name => {
                self.draft.name.push(c);
                self.field_errors.retain(|(f, _)| *f != SkillField::Name);
            }
            SkillFormFocus::Level => {
                if c.is_ascii_digit() && self.draft.level.len() < 3 {
                    self.draft.level.push(c);
                    self.field_errors.retain(|(f, _)| *f != SkillField::Level);
                }
            }
            SkillFormFocus::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        match self.focus {
            SkillFormFocus::Name => {
                self.draft.name.pop();
            }
            SkillFormFocus::Level => {
                self.draft.level.pop();
            }
            SkillFormFocus::Category => {}
        }
    }

    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return false;
        }
        self.field_errors.clear();
        self.submit_error = None;
        self.submitting = true;
        true
    }

    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }
}

/// The returned project used to seed an edit form.
pub fn seed_project_form(form: &mut ProjectForm, project: &Project) {
    form.draft = ProjectDraft::from_project(project);
    form.phase = FormPhase::Editing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::models::SkillCategory;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Tag {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_project_filter_cycle_walks_tags_then_wraps() {
        let tags = tags(&["rust", "web"]);
        let mut filter = ProjectFilter::All;
        filter = next_project_filter(&filter, &tags);
        assert_eq!(filter, ProjectFilter::Featured);
        filter = next_project_filter(&filter, &tags);
        assert_eq!(filter, ProjectFilter::Tag("rust".into()));
        filter = next_project_filter(&filter, &tags);
        assert_eq!(filter, ProjectFilter::Tag("web".into()));
        filter = next_project_filter(&filter, &tags);
        assert_eq!(filter, ProjectFilter::All);
    }

    #[test]
    fn test_project_filter_cycle_without_tags() {
        let filter = next_project_filter(&ProjectFilter::Featured, &[]);
        assert_eq!(filter, ProjectFilter::All);
    }

    #[test]
    fn test_invalid_submit_keeps_editing_and_annotates_fields() {
        let mut form = ProjectForm::create();
        form.draft.title = "ab".into();
        assert!(!form.begin_submit());
        assert_eq!(form.phase, FormPhase::Editing);
        assert!(form.field_error(ProjectField::Title).is_some());
        assert!(form.field_error(ProjectField::Description).is_some());
    }

    #[test]
    fn test_typing_clears_the_field_annotation() {
        let mut form = ProjectForm::create();
        assert!(!form.begin_submit());
        assert!(form.field_error(ProjectField::Title).is_some());
        form.focus = ProjectFormFocus::Title;
        form.enter_char('T');
        assert!(form.field_error(ProjectField::Title).is_none());
    }

    #[test]
    fn test_valid_submit_enters_submitting_and_failure_returns_to_editing() {
        let mut form = ProjectForm::create();
        form.draft.title = "Portfolio".into();
        form.draft.description = "A site worth describing at length".into();
        assert!(form.begin_submit());
        assert_eq!(form.phase, FormPhase::Submitting);

        // Submitting twice is refused while in flight
        assert!(!form.begin_submit());

        form.submit_failed("A project with this information already exists.".into());
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(
            form.submit_error.as_deref(),
            Some("A project with this information already exists.")
        );
        assert_eq!(form.draft.title, "Portfolio");
    }

    #[test]
    fn test_edit_form_is_not_editable_while_loading() {
        let mut form = ProjectForm::edit(5);
        assert_eq!(form.phase, FormPhase::Loading);
        form.enter_char('x');
        assert!(form.draft.title.is_empty());
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_tag_suggestions_exclude_existing_and_commit_adds_once() {
        let tags = tags(&["Rust", "React", "Redis"]);
        let mut form = ProjectForm::create();
        form.focus = ProjectFormFocus::Tags;
        form.enter_char('r');
        assert_eq!(form.suggestions(&tags), vec!["Rust", "React", "Redis"]);

        form.commit_tag(&tags);
        assert_eq!(form.draft.tags, vec!["Rust"]);

        // Same input again: Rust is now excluded from suggestions
        form.enter_char('r');
        assert_eq!(form.suggestions(&tags), vec!["React", "Redis"]);

        // Committing a duplicate by raw text is silently ignored
        form.tag_input = "Rust".into();
        form.suggestion = 99;
        form.commit_tag(&tags);
        assert_eq!(form.draft.tags, vec!["Rust"]);
    }

    #[test]
    fn test_backspace_on_empty_tag_input_pops_last_chip() {
        let mut form = ProjectForm::create();
        form.focus = ProjectFormFocus::Tags;
        form.draft.add_tag("rust");
        form.draft.add_tag("tui");
        form.backspace();
        assert_eq!(form.draft.tags, vec!["rust"]);
    }

    #[test]
    fn test_skill_form_level_only_accepts_digits() {
        let mut form = SkillForm::create();
        form.draft.level.clear();
        form.focus = SkillFormFocus::Level;
        form.enter_char('9');
        form.enter_char('x');
        form.enter_char('5');
        assert_eq!(form.draft.level, "95");
    }

    #[test]
    fn test_skill_form_submit_gate() {
        let mut form = SkillForm::create();
        form.draft.name.clear();
        assert!(!form.begin_submit());
        assert!(form.field_error(SkillField::Name).is_some());

        form.draft.name = "Rust".into();
        form.draft.level = "88".into();
        form.draft.category = SkillCategory::Backend;
        assert!(form.begin_submit());
        assert!(form.submitting);

        form.submit_failed("Database error".into());
        assert!(!form.submitting);
        assert_eq!(form.submit_error.as_deref(), Some("Database error"));
    }
}
