use serde::{Deserialize, Serialize};

/// Read-only reference entry used to autocomplete project tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
