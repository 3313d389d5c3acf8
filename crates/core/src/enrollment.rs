//! Per-course status transitions: `Available -> Enrolled -> Completed`.
//!
//! `Completed` is terminal. Transitions on a [`Session`] require a signed-in
//! user; anonymous callers get `LoginRequired` and nothing changes. The
//! machine does not consult the catalog; callers that care about unknown ids
//! check before calling.

use crate::model::{CourseId, ProgressRecord, Session};

/// Result of an enroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
    AlreadyCompleted,
    LoginRequired,
}

impl EnrollOutcome {
    /// True when the progress record was mutated.
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, EnrollOutcome::Enrolled)
    }
}

/// Result of a complete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// Newly completed. `was_enrolled` is false when completed straight from available.
    Completed { was_enrolled: bool },
    AlreadyCompleted,
    LoginRequired,
}

impl CompleteOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, CompleteOutcome::Completed { .. })
    }
}

impl ProgressRecord {
    /// Enroll in `course` unless it is already enrolled or completed.
    pub fn enroll(&mut self, course: CourseId) -> EnrollOutcome {
        if self.completed.contains(&course) {
            return EnrollOutcome::AlreadyCompleted;
        }
        if !self.enrolled.insert(course) {
            return EnrollOutcome::AlreadyEnrolled;
        }
        EnrollOutcome::Enrolled
    }

    /// Mark `course` completed, moving it out of the enrolled set.
    pub fn complete(&mut self, course: CourseId) -> CompleteOutcome {
        if self.completed.contains(&course) {
            return CompleteOutcome::AlreadyCompleted;
        }
        let was_enrolled = self.enrolled.remove(&course);
        self.completed.insert(course);
        CompleteOutcome::Completed { was_enrolled }
    }
}

impl Session {
    pub fn enroll(&mut self, course: CourseId) -> EnrollOutcome {
        match self.current_progress_mut() {
            Some(record) => record.enroll(course),
            None => EnrollOutcome::LoginRequired,
        }
    }

    pub fn complete(&mut self, course: CourseId) -> CompleteOutcome {
        match self.current_progress_mut() {
            Some(record) => record.complete(course),
            None => CompleteOutcome::LoginRequired,
        }
    }
}
