pub mod contact;
pub mod project;
pub mod skill;
pub mod tag;

pub use contact::{Contact, ContactSubmission};
pub use project::{Project, ProjectDraft, ProjectField, ProjectPayload};
pub use skill::{Skill, SkillCategory, SkillDraft, SkillField, SkillPayload};
pub use tag::Tag;
