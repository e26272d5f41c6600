//! File-backed session flag adapter

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use domain_session::{AuthState, SessionError, SessionStore, SESSION_KEY};

/// Persists the session flag as a single flat file
///
/// The file contains `true` while a session is active; clearing the flag
/// removes the file. A missing or unreadable-as-`true` file is the
/// inactive state, so a fresh install starts logged out.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store using the conventional file name in `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SESSION_KEY))
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<AuthState, SessionError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim() == "true" => Ok(AuthState::active()),
            Ok(_) => Ok(AuthState::inactive()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AuthState::inactive()),
            Err(e) => Err(SessionError::storage(e.to_string())),
        }
    }

    async fn save(&self, state: AuthState) -> Result<(), SessionError> {
        if state.is_active() {
            fs::write(&self.path, b"true")
                .await
                .map_err(|e| SessionError::storage(e.to_string()))?;
            tracing::debug!(path = %self.path.display(), "session flag written");
            Ok(())
        } else {
            self.clear().await
        }
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session flag removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> FileSessionStore {
        let path = std::env::temp_dir().join(format!("tarifa-session-{}", Uuid::new_v4()));
        FileSessionStore::new(path)
    }

    #[tokio::test]
    async fn test_missing_file_is_inactive() {
        let store = temp_store();
        assert!(!store.load().await.unwrap().is_active());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = temp_store();

        store.save(AuthState::active()).await.unwrap();
        assert!(store.load().await.unwrap().is_active());
        assert_eq!(
            tokio::fs::read_to_string(store.path()).await.unwrap(),
            "true"
        );

        store.clear().await.unwrap();
        assert!(!store.load().await.unwrap().is_active());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_saving_inactive_removes_file() {
        let store = temp_store();

        store.save(AuthState::active()).await.unwrap();
        store.save(AuthState::inactive()).await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = temp_store();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.load().await.unwrap().is_active());
    }

    #[tokio::test]
    async fn test_garbage_contents_read_as_inactive() {
        let store = temp_store();
        tokio::fs::write(store.path(), b"yes please").await.unwrap();
        assert!(!store.load().await.unwrap().is_active());
        store.clear().await.unwrap();
    }
}
