use std::sync::Arc;

use tracing::{debug, info};

use edulearn_core::Catalog;
use edulearn_core::enrollment::{CompleteOutcome, EnrollOutcome};
use edulearn_core::model::{Course, CourseId, Session};

use crate::error::EnrollmentError;
use crate::session_service::SessionService;

/// What an enroll request did, as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollResult {
    /// State changed (or was already in place); `session` is the fresh snapshot.
    Applied { outcome: EnrollOutcome, session: Session },
    /// Nobody is signed in; the caller should ask for a login.
    LoginRequired,
    /// Id not in the catalog. Nothing happened.
    UnknownCourse,
}

/// What a complete request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteResult {
    /// Newly completed; the caller shows an achievement for `course`.
    Completed { course: Course, session: Session },
    AlreadyCompleted { session: Session },
    LoginRequired,
    UnknownCourse,
}

/// Drives the enrollment state machine against the shared session.
#[derive(Clone)]
pub struct EnrollmentService {
    catalog: Arc<Catalog>,
    sessions: Arc<SessionService>,
}

impl EnrollmentService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, sessions: Arc<SessionService>) -> Self {
        Self { catalog, sessions }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Enroll the signed-in user in `course_id`.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::Storage` if persisting the change fails.
    pub async fn enroll(&self, course_id: CourseId) -> Result<EnrollResult, EnrollmentError> {
        if !self.catalog.contains(course_id) {
            debug!(%course_id, "enroll ignored: unknown course");
            return Ok(EnrollResult::UnknownCourse);
        }

        let (outcome, session) = self
            .sessions
            .update(|session| {
                let outcome = session.enroll(course_id);
                (outcome, outcome.changed())
            })
            .await?;

        Ok(match outcome {
            EnrollOutcome::LoginRequired => EnrollResult::LoginRequired,
            outcome => {
                if outcome.changed() {
                    info!(%course_id, "enrolled");
                }
                EnrollResult::Applied { outcome, session }
            }
        })
    }

    /// Mark `course_id` completed for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::Storage` if persisting the change fails.
    pub async fn complete(&self, course_id: CourseId) -> Result<CompleteResult, EnrollmentError> {
        let Some(course) = self.catalog.get(course_id).cloned() else {
            debug!(%course_id, "complete ignored: unknown course");
            return Ok(CompleteResult::UnknownCourse);
        };

        let (outcome, session) = self
            .sessions
            .update(|session| {
                let outcome = session.complete(course_id);
                (outcome, outcome.changed())
            })
            .await?;

        Ok(match outcome {
            CompleteOutcome::LoginRequired => CompleteResult::LoginRequired,
            CompleteOutcome::AlreadyCompleted => CompleteResult::AlreadyCompleted { session },
            CompleteOutcome::Completed { was_enrolled } => {
                info!(%course_id, was_enrolled, "completed");
                CompleteResult::Completed { course, session }
            }
        })
    }
}
