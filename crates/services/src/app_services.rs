use std::sync::Arc;

use edulearn_core::Catalog;
use storage::repository::Storage;
use storage::session_store::SessionStore;

use crate::Clock;
use crate::enrollment_service::EnrollmentService;
use crate::error::AppServicesError;
use crate::session_service::SessionService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    sessions: Arc<SessionService>,
    enrollment: Arc<EnrollmentService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the initial load fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, Catalog::builtin()).await
    }

    /// Build services over an arbitrary backend and catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the startup read fails.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        catalog: Catalog,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(catalog);
        let store = SessionStore::new(Arc::clone(&storage.kv));
        let sessions = Arc::new(SessionService::load(clock, store).await?);
        let enrollment = Arc::new(EnrollmentService::new(
            Arc::clone(&catalog),
            Arc::clone(&sessions),
        ));

        Ok(Self {
            catalog,
            sessions,
            enrollment,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn enrollment(&self) -> Arc<EnrollmentService> {
        Arc::clone(&self.enrollment)
    }
}
