//! Derived views over the resource caches.
//!
//! Everything here is a pure function of (cache, search term, filter):
//! no side effects, idempotent for identical inputs, server order
//! preserved. An item passes iff it matches BOTH the search term (vacuous
//! when empty) and the active filter (vacuous when `All`).

use crate::models::{Contact, Project, Skill, SkillCategory};

/// Check if text contains a search term (ASCII case-insensitive).
pub fn text_contains_term(text: &str, term: &str) -> bool {
    let text_chars: Vec<char> = text.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();

    if term_chars.is_empty() {
        return true;
    }
    if text_chars.len() < term_chars.len() {
        return false;
    }

    for start_idx in 0..=(text_chars.len() - term_chars.len()) {
        let matches = term_chars.iter().enumerate().all(|(i, tc)| {
            text_chars
                .get(start_idx + i)
                .is_some_and(|c| c.eq_ignore_ascii_case(tc))
        });
        if matches {
            return true;
        }
    }
    false
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Tag(String),
}

impl ProjectFilter {
    pub fn label(&self) -> String {
        match self {
            ProjectFilter::All => "all".to_string(),
            ProjectFilter::Featured => "featured".to_string(),
            ProjectFilter::Tag(name) => format!("tag:{name}"),
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Tag(name) => project.tags.iter().any(|t| t == name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SkillFilter::All => "all",
            SkillFilter::Category(category) => category.label(),
        }
    }

    /// Cycle all -> each category -> all.
    pub fn next(self) -> Self {
        match self {
            SkillFilter::All => SkillFilter::Category(SkillCategory::ALL[0]),
            SkillFilter::Category(category) => {
                let idx = SkillCategory::ALL
                    .iter()
                    .position(|c| *c == category)
                    .unwrap_or(0);
                if idx + 1 == SkillCategory::ALL.len() {
                    SkillFilter::All
                } else {
                    SkillFilter::Category(SkillCategory::ALL[idx + 1])
                }
            }
        }
    }

    fn matches(&self, skill: &Skill) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Category(category) => skill.category == *category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ContactFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ContactFilter::All => "all",
            ContactFilter::Unread => "unread",
            ContactFilter::Read => "read",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ContactFilter::All => ContactFilter::Unread,
            ContactFilter::Unread => ContactFilter::Read,
            ContactFilter::Read => ContactFilter::All,
        }
    }

    fn matches(&self, contact: &Contact) -> bool {
        match self {
            ContactFilter::All => true,
            ContactFilter::Unread => !contact.read,
            ContactFilter::Read => contact.read,
        }
    }
}

/// Searched fields: title, description and tags.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search: &str,
    filter: &ProjectFilter,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| {
            text_contains_term(&p.title, search)
                || text_contains_term(&p.description, search)
                || p.tags.iter().any(|t| text_contains_term(t, search))
        })
        .collect()
}

/// Searched field: name.
pub fn filter_skills<'a>(skills: &'a [Skill], search: &str, filter: &SkillFilter) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| filter.matches(s))
        .filter(|s| text_contains_term(&s.name, search))
        .collect()
}

/// Searched fields: name, email and subject (not the message body).
pub fn filter_contacts<'a>(
    contacts: &'a [Contact],
    search: &str,
    filter: &ContactFilter,
) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| filter.matches(c))
        .filter(|c| {
            text_contains_term(&c.name, search)
                || text_contains_term(&c.email, search)
                || text_contains_term(&c.subject, search)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project(id: i64, title: &str, featured: bool, tags: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            image: None,
            demo_url: None,
            repo_url: None,
            featured,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn skill(id: i64, name: &str, category: SkillCategory) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            level: 70,
            category,
        }
    }

    fn contact(id: i64, name: &str, subject: &str, read: bool) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: subject.to_string(),
            message: "body".into(),
            read,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_text_contains_term() {
        assert!(text_contains_term("Hello World", "hello"));
        assert!(text_contains_term("Hello World", "WORLD"));
        assert!(text_contains_term("Hello World", "lo Wo"));
        assert!(!text_contains_term("Hello World", "xyz"));
        assert!(text_contains_term("Hello World", ""));
        assert!(!text_contains_term("Hi", "Hello"));
    }

    #[test]
    fn test_empty_search_and_all_filter_return_everything_in_order() {
        let projects = vec![
            project(2, "Beta", false, &[]),
            project(1, "Alpha", true, &[]),
            project(3, "Gamma", false, &[]),
        ];
        let view = filter_projects(&projects, "", &ProjectFilter::All);
        let ids: Vec<i64> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_project_search_covers_title_description_and_tags() {
        let projects = vec![
            project(1, "Chat server", false, &["rust"]),
            project(2, "Blog", false, &["python"]),
            project(3, "Tracker", false, &[]),
        ];
        let by_tag = filter_projects(&projects, "RUST", &ProjectFilter::All);
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, 1);

        // Every match actually contains the term somewhere searched
        let view = filter_projects(&projects, "r", &ProjectFilter::All);
        for p in view {
            assert!(
                text_contains_term(&p.title, "r")
                    || text_contains_term(&p.description, "r")
                    || p.tags.iter().any(|t| text_contains_term(t, "r"))
            );
        }
    }

    #[test]
    fn test_search_and_filter_are_anded() {
        let projects = vec![
            project(1, "Chat server", true, &[]),
            project(2, "Chat client", false, &[]),
        ];
        let view = filter_projects(&projects, "chat", &ProjectFilter::Featured);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_featured_filter_with_no_featured_projects_is_empty() {
        let projects = vec![
            project(1, "One", false, &[]),
            project(2, "Two", false, &[]),
            project(3, "Three", false, &[]),
        ];
        assert!(filter_projects(&projects, "", &ProjectFilter::Featured).is_empty());
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let projects = vec![
            project(1, "One", false, &["rust"]),
            project(2, "Two", false, &["rustacean"]),
        ];
        let view = filter_projects(&projects, "", &ProjectFilter::Tag("rust".into()));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_skill_filter_by_category() {
        let skills = vec![
            skill(1, "React", SkillCategory::Frontend),
            skill(2, "Postgres", SkillCategory::Database),
            skill(3, "Rust", SkillCategory::Backend),
        ];
        let view = filter_skills(&skills, "", &SkillFilter::Category(SkillCategory::Database));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Postgres");

        let searched = filter_skills(&skills, "re", &SkillFilter::All);
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].name, "React");
    }

    #[test]
    fn test_skill_filter_cycle_visits_every_category_then_all() {
        let mut filter = SkillFilter::All;
        for _ in 0..SkillCategory::ALL.len() {
            filter = filter.next();
            assert_ne!(filter, SkillFilter::All);
        }
        assert_eq!(filter.next(), SkillFilter::All);
    }

    #[test]
    fn test_contact_filter_read_state() {
        let contacts = vec![
            contact(1, "Ada", "Question", false),
            contact(2, "Grace", "Invoice", true),
        ];
        let unread = filter_contacts(&contacts, "", &ContactFilter::Unread);
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, 1);

        let read = filter_contacts(&contacts, "", &ContactFilter::Read);
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, 2);
    }

    #[test]
    fn test_contact_search_does_not_match_message_body() {
        let mut c = contact(1, "Ada", "Question", false);
        c.message = "secret keyword".into();
        let contacts = vec![c];
        assert!(filter_contacts(&contacts, "secret", &ContactFilter::All).is_empty());
        assert_eq!(
            filter_contacts(&contacts, "ada@", &ContactFilter::All).len(),
            1
        );
    }
}
