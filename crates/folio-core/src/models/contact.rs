use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A message left through the public contact form. The admin side only
/// reads these, flips `read` true-once and deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    /// Naive ISO-8601 timestamp as the backend emits it.
    pub created_at: NaiveDateTime,
}

impl Contact {
    /// Timestamp formatted for display (day-first, 24h).
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Body for the public POST /contact endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_isoformat() {
        let json = r#"{
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice site!",
            "read": false,
            "created_at": "2024-03-01T09:30:00"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, 7);
        assert!(!contact.read);
        assert_eq!(contact.created_at_display(), "01/03/2024 09:30");
    }

    #[test]
    fn test_accepts_fractional_seconds() {
        let json = r#"{
            "id": 1,
            "name": "Grace",
            "email": "grace@example.com",
            "subject": "Hi",
            "message": "...",
            "read": true,
            "created_at": "2024-03-01T09:30:00.123456"
        }"#;
        assert!(serde_json::from_str::<Contact>(json).is_ok());
    }
}
