use std::sync::Arc;

use edulearn_core::model::{ProgressMap, Session, User};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::records::{ProgressEntries, UserRecord, entries_from_map, map_from_entries};
use crate::repository::{KeyValueStore, StorageError};

/// Key of the current-user record.
pub const USER_KEY: &str = "edulearn_user";
/// Key of the email → progress map.
pub const PROGRESS_KEY: &str = "edulearn_progress";

/// What `SessionStore::load` found on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub progress: ProgressMap,
}

impl PersistedSession {
    #[must_use]
    pub fn into_session(self) -> Session {
        Session::from_persisted(self.user, self.progress)
    }
}

/// Reads and writes the session's two records through a `KeyValueStore`.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read both records.
    ///
    /// Absent or malformed records fall back to their defaults (no user,
    /// empty progress) independently of each other.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` only when the backend itself cannot be read.
    pub async fn load(&self) -> Result<PersistedSession, StorageError> {
        let user = self
            .read_json::<UserRecord>(USER_KEY)
            .await?
            .and_then(|record| match record.into_user() {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(key = USER_KEY, %err, "discarding invalid stored user");
                    None
                }
            });

        let progress = self
            .read_json::<ProgressEntries>(PROGRESS_KEY)
            .await?
            .map(map_from_entries)
            .unwrap_or_default();

        Ok(PersistedSession { user, progress })
    }

    /// Write both records. A `None` user removes the user record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backend cannot be written, or
    /// `StorageError::Serialization` if encoding fails.
    pub async fn save(
        &self,
        user: Option<&User>,
        progress: &ProgressMap,
    ) -> Result<(), StorageError> {
        match user {
            Some(user) => {
                let json = to_json(&UserRecord::from_user(user))?;
                self.kv.set(USER_KEY, &json).await?;
            }
            None => self.kv.remove(USER_KEY).await?,
        }
        let json = to_json(&entries_from_map(progress))?;
        self.kv.set(PROGRESS_KEY, &json).await
    }

    /// Convenience wrapper around [`SessionStore::save`].
    ///
    /// # Errors
    ///
    /// See [`SessionStore::save`].
    pub async fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        self.save(session.current_user(), session.progress()).await
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, %err, "discarding malformed stored record");
                Ok(None)
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryKeyValueStore;
    use edulearn_core::model::{CourseId, ProgressRecord, SignInKind};
    use edulearn_core::time::fixed_now;

    fn store() -> (InMemoryKeyValueStore, SessionStore) {
        let kv = InMemoryKeyValueStore::new();
        let store = SessionStore::new(Arc::new(kv.clone()));
        (kv, store)
    }

    fn sample_progress() -> ProgressMap {
        let mut progress = ProgressMap::new();
        progress.insert(
            "ann@x.com".to_string(),
            ProgressRecord::from_persisted([CourseId::new(2)], [CourseId::new(1), CourseId::new(3)]),
        );
        progress.insert("bob@x.com".to_string(), ProgressRecord::new());
        progress
    }

    #[tokio::test]
    async fn empty_store_loads_defaults() {
        let (_, store) = store();
        assert_eq!(store.load().await.unwrap(), PersistedSession::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_, store) = store();
        let user = User::new("ann@x.com", "Ann", SignInKind::Signup, fixed_now()).unwrap();
        let progress = sample_progress();

        store.save(Some(&user), &progress).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.user, Some(user));
        assert_eq!(loaded.progress, progress);
    }

    #[tokio::test]
    async fn saving_without_user_removes_user_record() {
        let (kv, store) = store();
        let user = User::from_login("ann@x.com", fixed_now()).unwrap();
        store.save(Some(&user), &sample_progress()).await.unwrap();
        store.save(None, &sample_progress()).await.unwrap();

        assert_eq!(kv.get(USER_KEY).await.unwrap(), None);
        let loaded = store.load().await.unwrap();
        assert!(loaded.user.is_none());
        assert_eq!(loaded.progress.len(), 2);
    }

    #[tokio::test]
    async fn malformed_records_fall_back_independently() {
        let (kv, store) = store();
        kv.set(USER_KEY, "{not json").await.unwrap();
        kv.set(PROGRESS_KEY, r#"{"ann@x.com":{"enrolled":[4],"completed":[]}}"#)
            .await
            .unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.user.is_none());
        assert!(loaded.progress["ann@x.com"].is_enrolled(CourseId::new(4)));

        kv.set(USER_KEY, r#"{"email":"ann@x.com","name":"Ann"}"#)
            .await
            .unwrap();
        kv.set(PROGRESS_KEY, "[1,2,3]").await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.user.map(|u| u.name().to_owned()), Some("Ann".into()));
        assert!(loaded.progress.is_empty());
    }

    #[tokio::test]
    async fn blank_stored_email_is_discarded() {
        let (kv, store) = store();
        kv.set(USER_KEY, r#"{"email":"","name":"Ghost"}"#).await.unwrap();
        assert!(store.load().await.unwrap().user.is_none());
    }

    #[tokio::test]
    async fn writes_browser_compatible_json() {
        let (kv, store) = store();
        store.save(None, &sample_progress()).await.unwrap();
        let raw = kv.get(PROGRESS_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["ann@x.com"]["enrolled"], serde_json::json!([2]));
        assert_eq!(value["ann@x.com"]["completed"], serde_json::json!([1, 3]));
    }

    #[tokio::test]
    async fn into_session_backfills_current_record() {
        let persisted = PersistedSession {
            user: Some(User::from_login("new@x.com", fixed_now()).unwrap()),
            progress: ProgressMap::new(),
        };
        let session = persisted.into_session();
        assert_eq!(session.current_progress(), Some(&ProgressRecord::new()));
    }
}
