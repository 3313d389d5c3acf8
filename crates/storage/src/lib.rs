#![forbid(unsafe_code)]

pub mod records;
pub mod repository;
pub mod session_store;
pub mod sqlite;

pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};
pub use session_store::{PROGRESS_KEY, PersistedSession, SessionStore, USER_KEY};
