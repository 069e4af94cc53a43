use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{SKILL_LEVEL_MAX, SKILL_LEVEL_MIN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// The fixed category set the backend stores as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Design,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Mobile,
        SkillCategory::Design,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Design => "design",
            SkillCategory::Other => "other",
        }
    }

    /// Human label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Devops => "DevOps",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Other",
        }
    }

    /// Next category in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        SkillCategory::Frontend
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown skill category: {s}"))
    }
}

/// Body for POST /skills and PUT /skills/:id.
#[derive(Debug, Clone, Serialize)]
pub struct SkillPayload {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Level,
}

/// Editable carrier for the skill modal form. The level stays a string
/// while editing so partial input does not get clobbered.
#[derive(Debug, Clone)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
    pub category: SkillCategory,
}

impl Default for SkillDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: String::from("50"),
            category: SkillCategory::default(),
        }
    }
}

impl SkillDraft {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level.to_string(),
            category: skill.category,
        }
    }

    pub fn validate(&self) -> Vec<(SkillField, String)> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push((SkillField::Name, "Name is required".to_string()));
        }
        match self.level.trim().parse::<u8>() {
            Ok(level) if (SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX).contains(&level) => {}
            _ => errors.push((
                SkillField::Level,
                format!("Level must be a number between {SKILL_LEVEL_MIN} and {SKILL_LEVEL_MAX}"),
            )),
        }
        errors
    }

    /// Build the request body. Only valid after `validate` returned no
    /// errors.
    pub fn to_payload(&self) -> Option<SkillPayload> {
        let level = self.level.trim().parse::<u8>().ok()?;
        if !(SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX).contains(&level) {
            return None;
        }
        Some(SkillPayload {
            name: self.name.trim().to_string(),
            level,
            category: self.category,
        })
    }
}
