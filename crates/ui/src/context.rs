use std::sync::Arc;

use edulearn_core::Catalog;
use edulearn_core::model::Session;
use services::{Clock, EnrollmentService, SessionService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn sessions(&self) -> Arc<SessionService>;
    fn enrollment(&self) -> Arc<EnrollmentService>;
    fn clock(&self) -> Clock;

    /// Session state read at startup, shown before any action runs.
    fn initial_session(&self) -> Session;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    sessions: Arc<SessionService>,
    enrollment: Arc<EnrollmentService>,
    clock: Clock,
    initial_session: Session,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            sessions: app.sessions(),
            enrollment: app.enrollment(),
            clock: app.clock(),
            initial_session: app.initial_session(),
        }
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

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn initial_session(&self) -> Session {
        self.initial_session.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
