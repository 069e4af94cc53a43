//! Bearer-token session state.
//!
//! The token lives in one fixed file under the data dir (the analog of the
//! original client's single localStorage key) and in memory on `Session`,
//! which is the only writer. A stored token is assumed valid until a
//! protected request proves otherwise; there is no local expiry check.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::TOKEN_FILE;

/// Persistence for the bearer token under a fixed file name.
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(TOKEN_FILE),
        }
    }

    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(error = %e, "failed to remove token file"),
        }
    }
}

/// Process-wide session value with explicit login/confirm/invalidate
/// transitions. Guarded screens may only render while `is_authenticated`.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    /// Set once a protected request has succeeded with the current token.
    validated: bool,
    storage: TokenStorage,
}

impl Session {
    /// Restore a previously persisted token, if any. The token still needs
    /// a successful probe before `is_authenticated` turns true.
    pub fn load(storage: TokenStorage) -> Self {
        let token = storage.load();
        Self {
            token,
            validated: false,
            storage,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.validated
    }

    /// Store a freshly issued token (login succeeded, so it is validated).
    pub fn establish(&mut self, token: String) {
        if let Err(e) = self.storage.save(&token) {
            warn!(error = %e, "failed to persist token");
        }
        self.token = Some(token);
        self.validated = true;
    }

    /// A protected request succeeded with the current token.
    pub fn confirm(&mut self) {
        if self.token.is_some() {
            self.validated = true;
        }
    }

    /// Drop the token unconditionally (logout, or any auth failure from a
    /// protected endpoint).
    pub fn invalidate(&mut self) {
        self.token = None;
        self.validated = false;
        self.storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path());

        assert!(storage.load().is_none());
        storage.save("abc.def.ghi").unwrap();
        assert_eq!(storage.load().as_deref(), Some("abc.def.ghi"));

        storage.clear();
        assert!(storage.load().is_none());
        // Clearing twice is fine
        storage.clear();
    }

    #[test]
    fn test_blank_token_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path());
        storage.save("   \n").unwrap();
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_session_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path());

        let mut session = Session::load(storage.clone());
        assert!(!session.has_token());
        assert!(!session.is_authenticated());

        session.establish("tok".into());
        assert!(session.is_authenticated());
        assert_eq!(storage.load().as_deref(), Some("tok"));

        session.invalidate();
        assert!(!session.has_token());
        assert!(!session.is_authenticated());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_restored_token_needs_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TokenStorage::new(dir.path());
        storage.save("persisted").unwrap();

        let mut session = Session::load(storage);
        assert!(session.has_token());
        assert!(!session.is_authenticated());

        session.confirm();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_confirm_without_token_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::load(TokenStorage::new(dir.path()));
        session.confirm();
        assert!(!session.is_authenticated());
    }
}
