use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use folio_core::config::Config;
use folio_core::constants::PAGE_SIZE;
use folio_core::models::{Contact, Project, Skill, Tag};
use folio_core::pagination::{paginate, Page};
use folio_core::search::{
    filter_contacts, filter_projects, filter_skills, ProjectFilter,
};
use folio_core::store::{ContactStore, ResourceStore};
use folio_core::{ApiClient, ApiError, Session};

use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::state::{
    next_project_filter, seed_project_form, ContactsScreen, FormMode, FormPhase, LoginScreen,
    ProjectForm, ProjectsScreen, SkillForm, SkillsScreen,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Admin,
    ProjectForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Projects,
    Skills,
    Messages,
}

/// Result of a spawned API call, delivered back to the UI loop through the
/// app event channel.
#[derive(Debug)]
pub enum AppEvent {
    LoginFinished {
        result: Result<String, ApiError>,
    },
    ProbeFinished {
        result: Result<Vec<Contact>, ApiError>,
    },
    ProjectsLoaded {
        epoch: u64,
        result: Result<Vec<Project>, ApiError>,
    },
    SkillsLoaded {
        epoch: u64,
        result: Result<Vec<Skill>, ApiError>,
    },
    ContactsLoaded {
        epoch: u64,
        result: Result<Vec<Contact>, ApiError>,
    },
    TagsLoaded {
        result: Result<Vec<Tag>, ApiError>,
    },
    ProjectFetched {
        id: i64,
        result: Result<Project, ApiError>,
    },
    ProjectSaved {
        mode: FormMode,
        result: Result<Project, ApiError>,
    },
    ProjectDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    SkillSaved {
        mode: FormMode,
        result: Result<Skill, ApiError>,
    },
    SkillDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    ContactMarkedRead {
        id: i64,
        result: Result<(), ApiError>,
    },
    ContactDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
}

pub struct App {
    pub running: bool,
    pub view: View,
    pub tab: AdminTab,
    pub config: Config,
    pub session: Session,

    pub projects: ResourceStore<Project>,
    pub skills: ResourceStore<Skill>,
    pub tags: ResourceStore<Tag>,
    pub contacts: ContactStore,

    pub login: LoginScreen,
    pub projects_screen: ProjectsScreen,
    pub skills_screen: SkillsScreen,
    pub contacts_screen: ContactsScreen,
    pub project_form: Option<ProjectForm>,
    pub skill_form: Option<SkillForm>,

    pub notifications: NotificationQueue,
    events_tx: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(config: Config, session: Session, events_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            running: true,
            view: View::Login,
            tab: AdminTab::Projects,
            config,
            session,
            projects: ResourceStore::new(),
            skills: ResourceStore::new(),
            tags: ResourceStore::new(),
            contacts: ContactStore::new(),
            login: LoginScreen::new(),
            projects_screen: ProjectsScreen::new(),
            skills_screen: SkillsScreen::new(),
            contacts_screen: ContactsScreen::new(),
            project_form: None,
            skill_form: None,
            notifications: NotificationQueue::new(),
            events_tx,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Client snapshot carrying the current token; spawned tasks own it.
    fn client(&self) -> ApiClient {
        ApiClient::new(
            self.config.api_url.clone(),
            self.session.token().map(str::to_string),
        )
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(task.await);
        });
    }

    // ===== Session flows =====

    /// Validate a restored token with one protected call; it doubles as
    /// the initial contacts load for the unread badge.
    pub fn begin_startup_probe(&mut self) {
        if !self.session.has_token() {
            return;
        }
        self.login.checking = true;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ProbeFinished {
                result: client.list_contacts().await,
            }
        });
    }

    pub fn submit_login(&mut self) {
        if self.login.submitting {
            return;
        }
        if self.login.username.trim().is_empty() || self.login.password.trim().is_empty() {
            self.login.error = Some("Please enter both username and password".to_string());
            return;
        }
        self.login.submitting = true;
        self.login.error = None;
        let client = self.client();
        let username = self.login.username.clone();
        let password = self.login.password.clone();
        self.spawn(async move {
            AppEvent::LoginFinished {
                result: client.login(&username, &password).await,
            }
        });
    }

    pub fn logout(&mut self) {
        self.reset_to_login();
        self.notify(Notification::info("Logged out"));
    }

    /// Auth failure from any screen: one consistent policy, immediate
    /// redirect to login.
    fn force_logout(&mut self, message: String) {
        self.reset_to_login();
        self.notify(Notification::error(message));
    }

    fn reset_to_login(&mut self) {
        self.session.invalidate();
        self.projects.clear();
        self.skills.clear();
        self.tags.clear();
        self.contacts.clear();
        // Fresh screens, with each epoch bumped past its old value so a
        // response still in flight for the old session can never match.
        let epochs = [
            self.projects_screen.controls.epoch + 1,
            self.skills_screen.controls.epoch + 1,
            self.contacts_screen.controls.epoch + 1,
        ];
        self.projects_screen = ProjectsScreen::new();
        self.skills_screen = SkillsScreen::new();
        self.contacts_screen = ContactsScreen::new();
        self.projects_screen.controls.epoch = epochs[0];
        self.skills_screen.controls.epoch = epochs[1];
        self.contacts_screen.controls.epoch = epochs[2];
        self.project_form = None;
        self.skill_form = None;
        self.login = LoginScreen::new();
        self.view = View::Login;
        self.tab = AdminTab::Projects;
    }

    fn enter_admin(&mut self) {
        self.view = View::Admin;
        self.tab = AdminTab::Projects;
        self.refresh_projects();
        self.refresh_skills();
        self.refresh_tags();
        if self.contacts.is_empty() {
            self.refresh_contacts();
        }
    }

    // ===== List refreshes =====

    pub fn refresh_projects(&mut self) {
        let epoch = self.projects_screen.controls.next_epoch();
        self.projects_screen.controls.loading = true;
        self.projects_screen.controls.error = None;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ProjectsLoaded {
                epoch,
                result: client.list_projects(&ProjectFilter::All).await,
            }
        });
    }

    pub fn refresh_skills(&mut self) {
        let epoch = self.skills_screen.controls.next_epoch();
        self.skills_screen.controls.loading = true;
        self.skills_screen.controls.error = None;
        let client = self.client();
        self.spawn(async move {
            AppEvent::SkillsLoaded {
                epoch,
                result: client
                    .list_skills(&folio_core::search::SkillFilter::All)
                    .await,
            }
        });
    }

    pub fn refresh_contacts(&mut self) {
        let epoch = self.contacts_screen.controls.next_epoch();
        self.contacts_screen.controls.loading = true;
        self.contacts_screen.controls.error = None;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ContactsLoaded {
                epoch,
                result: client.list_contacts().await,
            }
        });
    }

    pub fn refresh_tags(&mut self) {
        let client = self.client();
        self.spawn(async move {
            AppEvent::TagsLoaded {
                result: client.list_tags().await,
            }
        });
    }

    // ===== Derived views =====

    pub fn projects_view(&self) -> Vec<&Project> {
        filter_projects(
            self.projects.items(),
            &self.projects_screen.controls.search,
            &self.projects_screen.filter,
        )
    }

    pub fn projects_page(&self) -> (Vec<&Project>, Page) {
        let view = self.projects_view();
        let page = paginate(view.len(), PAGE_SIZE, self.projects_screen.controls.page);
        (view[page.start..page.end].to_vec(), page)
    }

    pub fn skills_view(&self) -> Vec<&Skill> {
        filter_skills(
            self.skills.items(),
            &self.skills_screen.controls.search,
            &self.skills_screen.filter,
        )
    }

    pub fn skills_page(&self) -> (Vec<&Skill>, Page) {
        let view = self.skills_view();
        let page = paginate(view.len(), PAGE_SIZE, self.skills_screen.controls.page);
        (view[page.start..page.end].to_vec(), page)
    }

    pub fn contacts_view(&self) -> Vec<&Contact> {
        filter_contacts(
            self.contacts.items(),
            &self.contacts_screen.controls.search,
            &self.contacts_screen.filter,
        )
    }

    pub fn contacts_page(&self) -> (Vec<&Contact>, Page) {
        let view = self.contacts_view();
        let page = paginate(view.len(), PAGE_SIZE, self.contacts_screen.controls.page);
        (view[page.start..page.end].to_vec(), page)
    }

    pub fn unread_count(&self) -> usize {
        self.contacts.unread_count()
    }

    /// Re-clamp each screen's page and cursor after the underlying view
    /// changed (load, delete, filter edit).
    pub fn sync_list_windows(&mut self) {
        let lens = [
            self.projects_view().len(),
            self.skills_view().len(),
            self.contacts_view().len(),
        ];
        for (len, screen) in lens.into_iter().zip([
            &mut self.projects_screen.controls,
            &mut self.skills_screen.controls,
            &mut self.contacts_screen.controls,
        ]) {
            let page = paginate(len, PAGE_SIZE, screen.page);
            screen.page = page.number;
            let rows = page.end - page.start;
            screen.cursor = screen.cursor.min(rows.saturating_sub(1));
        }
    }

    // ===== Projects screen actions =====

    pub fn cycle_project_filter(&mut self) {
        self.projects_screen.filter =
            next_project_filter(&self.projects_screen.filter, self.tags.items());
        self.projects_screen.controls.reset_view();
    }

    pub fn cursor_project_id(&self) -> Option<i64> {
        let (rows, _) = self.projects_page();
        rows.get(self.projects_screen.controls.cursor).map(|p| p.id)
    }

    pub fn open_project_create(&mut self) {
        self.project_form = Some(ProjectForm::create());
        self.view = View::ProjectForm;
    }

    pub fn open_project_edit(&mut self, id: i64) {
        self.project_form = Some(ProjectForm::edit(id));
        self.view = View::ProjectForm;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ProjectFetched {
                id,
                result: client.get_project(id).await,
            }
        });
    }

    pub fn submit_project_form(&mut self) {
        let Some(form) = self.project_form.as_mut() else {
            return;
        };
        if !form.begin_submit() {
            return;
        }
        let mode = form.mode;
        let payload = form.draft.to_payload();
        let client = self.client();
        self.spawn(async move {
            let result = match mode {
                FormMode::Create => client.create_project(&payload).await,
                FormMode::Edit(id) => client.update_project(id, &payload).await,
            };
            AppEvent::ProjectSaved { mode, result }
        });
    }

    pub fn close_project_form(&mut self) {
        self.project_form = None;
        self.view = View::Admin;
    }

    pub fn confirm_delete_project(&mut self) {
        let Some(id) = self.projects_screen.controls.confirm_delete.take() else {
            return;
        };
        if self.projects_screen.controls.mutating {
            return;
        }
        self.projects_screen.controls.mutating = true;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ProjectDeleted {
                id,
                result: client.delete_project(id).await,
            }
        });
    }

    // ===== Skills screen actions =====

    pub fn cursor_skill(&self) -> Option<Skill> {
        let (rows, _) = self.skills_page();
        rows.get(self.skills_screen.controls.cursor)
            .map(|s| (*s).clone())
    }

    pub fn open_skill_create(&mut self) {
        self.skill_form = Some(SkillForm::create());
    }

    pub fn open_skill_edit(&mut self) {
        if let Some(skill) = self.cursor_skill() {
            self.skill_form = Some(SkillForm::edit(&skill));
        }
    }

    pub fn submit_skill_form(&mut self) {
        let Some(form) = self.skill_form.as_mut() else {
            return;
        };
        if !form.begin_submit() {
            return;
        }
        let Some(payload) = form.draft.to_payload() else {
            // validate() passed, so this cannot miss; stay safe anyway
            form.submit_failed("Invalid skill data".to_string());
            return;
        };
        let mode = form.mode;
        let client = self.client();
        self.spawn(async move {
            let result = match mode {
                FormMode::Create => client.create_skill(&payload).await,
                FormMode::Edit(id) => client.update_skill(id, &payload).await,
            };
            AppEvent::SkillSaved { mode, result }
        });
    }

    pub fn confirm_delete_skill(&mut self) {
        let Some(id) = self.skills_screen.controls.confirm_delete.take() else {
            return;
        };
        if self.skills_screen.controls.mutating {
            return;
        }
        self.skills_screen.controls.mutating = true;
        let client = self.client();
        self.spawn(async move {
            AppEvent::SkillDeleted {
                id,
                result: client.delete_skill(id).await,
            }
        });
    }

    // ===== Contacts screen actions =====

    pub fn cursor_contact_id(&self) -> Option<i64> {
        let (rows, _) = self.contacts_page();
        rows.get(self.contacts_screen.controls.cursor).map(|c| c.id)
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.contacts_screen
            .selected_id
            .and_then(|id| self.contacts.get(id))
    }

    /// Show a contact in the detail pane; first selection of an unread
    /// message issues exactly one mark-read mutation.
    pub fn open_contact(&mut self, id: i64) {
        let Some(contact) = self.contacts.get(id) else {
            return;
        };
        let unread = !contact.read;
        self.contacts_screen.selected_id = Some(id);
        if unread && self.contacts_screen.mark_read_in_flight.is_none() {
            self.contacts_screen.mark_read_in_flight = Some(id);
            let client = self.client();
            self.spawn(async move {
                AppEvent::ContactMarkedRead {
                    id,
                    result: client.mark_contact_read(id).await,
                }
            });
        }
    }

    pub fn confirm_delete_contact(&mut self) {
        let Some(id) = self.contacts_screen.controls.confirm_delete.take() else {
            return;
        };
        if self.contacts_screen.controls.mutating {
            return;
        }
        self.contacts_screen.controls.mutating = true;
        let client = self.client();
        self.spawn(async move {
            AppEvent::ContactDeleted {
                id,
                result: client.delete_contact(id).await,
            }
        });
    }

    // ===== Event handling =====

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginFinished { result } => {
                self.login.submitting = false;
                match result {
                    Ok(token) => {
                        self.session.establish(token);
                        self.enter_admin();
                        self.notify(Notification::success("Logged in"));
                    }
                    // The login screen shows every failure locally,
                    // including auth ones: there is nothing to invalidate.
                    Err(e) => self.login.error = Some(e.to_string()),
                }
            }
            AppEvent::ProbeFinished { result } => {
                self.login.checking = false;
                match result {
                    Ok(contacts) => {
                        self.session.confirm();
                        self.contacts.replace_all(contacts);
                        self.enter_admin();
                    }
                    Err(e) => {
                        // Stored token did not survive its probe.
                        self.session.invalidate();
                        if !e.is_auth() {
                            self.notify(Notification::error(e.to_string()));
                        }
                    }
                }
            }
            AppEvent::ProjectsLoaded { epoch, result } => {
                if epoch != self.projects_screen.controls.epoch {
                    debug!(epoch, "dropping stale projects response");
                    return;
                }
                self.projects_screen.controls.loading = false;
                match result {
                    Ok(projects) => {
                        self.projects.replace_all(projects);
                        self.sync_list_windows();
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.projects_screen.controls.error = Some(e.to_string()),
                }
            }
            AppEvent::SkillsLoaded { epoch, result } => {
                if epoch != self.skills_screen.controls.epoch {
                    debug!(epoch, "dropping stale skills response");
                    return;
                }
                self.skills_screen.controls.loading = false;
                match result {
                    Ok(skills) => {
                        self.skills.replace_all(skills);
                        self.sync_list_windows();
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.skills_screen.controls.error = Some(e.to_string()),
                }
            }
            AppEvent::ContactsLoaded { epoch, result } => {
                if epoch != self.contacts_screen.controls.epoch {
                    debug!(epoch, "dropping stale contacts response");
                    return;
                }
                self.contacts_screen.controls.loading = false;
                match result {
                    Ok(contacts) => {
                        self.contacts.replace_all(contacts);
                        self.sync_list_windows();
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.contacts_screen.controls.error = Some(e.to_string()),
                }
            }
            AppEvent::TagsLoaded { result } => match result {
                Ok(tags) => self.tags.replace_all(tags),
                // The tag reference set is a nicety; keep quiet beyond a log
                Err(e) => debug!(error = %e, "failed to load tags"),
            },
            AppEvent::ProjectFetched { id, result } => {
                let Some(form) = self.project_form.as_mut() else {
                    return;
                };
                if form.mode != FormMode::Edit(id) || form.phase != FormPhase::Loading {
                    return;
                }
                match result {
                    Ok(project) => seed_project_form(form, &project),
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => form.phase = FormPhase::LoadFailed(e.to_string()),
                }
            }
            AppEvent::ProjectSaved { mode, result } => match result {
                Ok(project) => {
                    match mode {
                        FormMode::Create => self.projects.apply_create(project),
                        FormMode::Edit(_) => self.projects.apply_update(project),
                    }
                    self.close_project_form();
                    self.tab = AdminTab::Projects;
                    self.sync_list_windows();
                    // Ad hoc tags may have been created server-side
                    self.refresh_tags();
                    self.notify(Notification::success(match mode {
                        FormMode::Create => "Project created",
                        FormMode::Edit(_) => "Project updated",
                    }));
                }
                Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                Err(e) => {
                    if let Some(form) = self.project_form.as_mut() {
                        form.submit_failed(e.to_string());
                    } else {
                        self.notify(Notification::error(e.to_string()));
                    }
                }
            },
            AppEvent::ProjectDeleted { id, result } => {
                self.projects_screen.controls.mutating = false;
                match result {
                    Ok(()) => {
                        self.projects.apply_remove(id);
                        self.sync_list_windows();
                        self.notify(Notification::success("Project deleted"));
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.notify(Notification::error(e.to_string())),
                }
            }
            AppEvent::SkillSaved { mode, result } => match result {
                Ok(skill) => {
                    match mode {
                        FormMode::Create => self.skills.apply_create(skill),
                        FormMode::Edit(_) => self.skills.apply_update(skill),
                    }
                    self.skill_form = None;
                    self.sync_list_windows();
                    self.notify(Notification::success(match mode {
                        FormMode::Create => "Skill created",
                        FormMode::Edit(_) => "Skill updated",
                    }));
                }
                Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                Err(e) => {
                    if let Some(form) = self.skill_form.as_mut() {
                        form.submit_failed(e.to_string());
                    } else {
                        self.notify(Notification::error(e.to_string()));
                    }
                }
            },
            AppEvent::SkillDeleted { id, result } => {
                self.skills_screen.controls.mutating = false;
                match result {
                    Ok(()) => {
                        self.skills.apply_remove(id);
                        self.sync_list_windows();
                        self.notify(Notification::success("Skill deleted"));
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.notify(Notification::error(e.to_string())),
                }
            }
            AppEvent::ContactMarkedRead { id, result } => {
                if self.contacts_screen.mark_read_in_flight == Some(id) {
                    self.contacts_screen.mark_read_in_flight = None;
                }
                match result {
                    Ok(()) => {
                        self.contacts.mark_read(id);
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    // The message stays unread; the detail pane still shows
                    Err(e) => self.notify(Notification::error(e.to_string())),
                }
            }
            AppEvent::ContactDeleted { id, result } => {
                self.contacts_screen.controls.mutating = false;
                match result {
                    Ok(()) => {
                        self.contacts.apply_remove(id);
                        if self.contacts_screen.selected_id == Some(id) {
                            self.contacts_screen.selected_id = None;
                        }
                        self.sync_list_windows();
                        self.notify(Notification::success("Message deleted"));
                    }
                    Err(e) if e.is_auth() => self.force_logout(e.to_string()),
                    Err(e) => self.notify(Notification::error(e.to_string())),
                }
            }
        }
    }
}
