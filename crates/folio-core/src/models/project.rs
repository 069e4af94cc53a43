use serde::{Deserialize, Serialize};

use crate::constants::{DESCRIPTION_MIN_LEN, TITLE_MIN_LEN};

/// A portfolio project as the backend serves it. `id` is server-assigned
/// and immutable; URL fields keep the backend's camelCase names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "demoUrl")]
    pub demo_url: Option<String>,
    #[serde(rename = "repoUrl")]
    pub repo_url: Option<String>,
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for POST /projects and PUT /projects/:id.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(rename = "demoUrl")]
    pub demo_url: Option<String>,
    #[serde(rename = "repoUrl")]
    pub repo_url: Option<String>,
    pub featured: bool,
    pub tags: Vec<String>,
}

/// Fields the create/edit form can annotate with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    DemoUrl,
    RepoUrl,
}

/// Editable carrier for the project create/edit form. Text fields stay
/// strings while editing; `to_payload` trims and converts empties to null
/// the way the original form submitted them.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub demo_url: String,
    pub repo_url: String,
    pub featured: bool,
    pub tags: Vec<String>,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone().unwrap_or_default(),
            demo_url: project.demo_url.clone().unwrap_or_default(),
            repo_url: project.repo_url.clone().unwrap_or_default(),
            featured: project.featured,
            tags: project.tags.clone(),
        }
    }

    /// Add a tag unless the project already carries it (exact match);
    /// duplicates are silently ignored.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
    }

    pub fn remove_last_tag(&mut self) {
        self.tags.pop();
    }

    /// Client-side validation mirroring what the server will enforce:
    /// required fields with minimum lengths, well-formed optional URLs.
    pub fn validate(&self) -> Vec<(ProjectField, String)> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push((ProjectField::Title, "Title is required".to_string()));
        } else if title.len() < TITLE_MIN_LEN {
            errors.push((
                ProjectField::Title,
                format!("Title must be at least {TITLE_MIN_LEN} characters long"),
            ));
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push((
                ProjectField::Description,
                "Description is required".to_string(),
            ));
        } else if description.len() < DESCRIPTION_MIN_LEN {
            errors.push((
                ProjectField::Description,
                format!("Description must be at least {DESCRIPTION_MIN_LEN} characters long"),
            ));
        }

        if !self.demo_url.trim().is_empty() && url::Url::parse(self.demo_url.trim()).is_err() {
            errors.push((ProjectField::DemoUrl, "Please enter a valid URL".to_string()));
        }
        if !self.repo_url.trim().is_empty() && url::Url::parse(self.repo_url.trim()).is_err() {
            errors.push((ProjectField::RepoUrl, "Please enter a valid URL".to_string()));
        }

        errors
    }

    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: non_empty(&self.image),
            demo_url: non_empty(&self.demo_url),
            repo_url: non_empty(&self.repo_url),
            featured: self.featured,
            tags: self.tags.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Portfolio site".into(),
            description: "A personal portfolio with an admin console".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut draft = valid_draft();
        draft.title = "  ".into();
        let errors = draft.validate();
        assert!(errors
            .iter()
            .any(|(field, _)| *field == ProjectField::Title));
    }

    #[test]
    fn test_short_fields_are_rejected() {
        let mut draft = valid_draft();
        draft.title = "ab".into();
        draft.description = "too short".into();
        let errors = draft.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_bad_urls_are_rejected_good_urls_pass() {
        let mut draft = valid_draft();
        draft.demo_url = "not a url".into();
        draft.repo_url = "https://github.com/someone/portfolio".into();
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ProjectField::DemoUrl);
    }

    #[test]
    fn test_add_tag_ignores_duplicates_and_blanks() {
        let mut draft = valid_draft();
        draft.add_tag("rust");
        draft.add_tag(" rust ");
        draft.add_tag("");
        draft.add_tag("tui");
        assert_eq!(draft.tags, vec!["rust", "tui"]);
    }

    #[test]
    fn test_payload_nulls_empty_optionals() {
        let mut draft = valid_draft();
        draft.demo_url = "  ".into();
        draft.repo_url = "https://example.com".into();
        let payload = draft.to_payload();
        assert!(payload.demo_url.is_none());
        assert_eq!(payload.repo_url.as_deref(), Some("https://example.com"));
        assert!(payload.image.is_none());
    }
}
