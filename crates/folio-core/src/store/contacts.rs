use crate::models::Contact;
use crate::store::ResourceStore;

/// Contact cache with read-state tracking on top of the generic store.
///
/// `read` only ever moves false -> true; the unread count is derived from
/// the cache, never tracked separately.
#[derive(Debug, Default)]
pub struct ContactStore {
    store: ResourceStore<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            store: ResourceStore::new(),
        }
    }

    pub fn items(&self) -> &[Contact] {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Contact> {
        self.store.get(id)
    }

    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.store.replace_all(contacts);
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Flip a contact to read after the server confirmed the mutation.
    /// Returns true if the flag actually changed.
    pub fn mark_read(&mut self, id: i64) -> bool {
        match self.store.get_mut(id) {
            Some(contact) if !contact.read => {
                contact.read = true;
                true
            }
            _ => false,
        }
    }

    pub fn apply_remove(&mut self, id: i64) -> bool {
        self.store.apply_remove(id)
    }

    pub fn unread_count(&self) -> usize {
        self.store.items().iter().filter(|c| !c.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contact(id: i64, read: bool) -> Contact {
        Contact {
            id,
            name: format!("sender {id}"),
            email: format!("sender{id}@example.com"),
            subject: "hello".into(),
            message: "body".into(),
            read,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_unread_count_tracks_cache() {
        let mut store = ContactStore::new();
        store.replace_all(vec![contact(1, false), contact(2, true), contact(3, false)]);
        assert_eq!(store.unread_count(), 2);

        assert!(store.mark_read(1));
        assert_eq!(store.unread_count(), 1);

        store.apply_remove(3);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_mark_read_is_monotonic_and_idempotent() {
        let mut store = ContactStore::new();
        store.replace_all(vec![contact(1, false)]);

        assert!(store.mark_read(1));
        assert!(!store.mark_read(1));
        assert!(store.get(1).unwrap().read);

        // Unknown ids are a no-op
        assert!(!store.mark_read(99));
    }
}
