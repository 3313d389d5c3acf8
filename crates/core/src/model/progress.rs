use std::collections::BTreeSet;
use std::fmt;

use crate::model::ids::CourseId;

/// Where a single course stands for a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Available,
    Enrolled,
    Completed,
}

impl CourseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CourseStatus::Available => "Available",
            CourseStatus::Enrolled => "Enrolled",
            CourseStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Enrollment and completion sets for one user.
///
/// A course id is never in both sets. Mutation goes through the
/// transitions in [`crate::enrollment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    pub(crate) enrolled: BTreeSet<CourseId>,
    pub(crate) completed: BTreeSet<CourseId>,
}

impl ProgressRecord {
    /// An empty record: nothing enrolled, nothing completed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from stored id lists.
    ///
    /// Duplicates collapse. An id present in both lists is kept as completed only.
    #[must_use]
    pub fn from_persisted(
        enrolled: impl IntoIterator<Item = CourseId>,
        completed: impl IntoIterator<Item = CourseId>,
    ) -> Self {
        let completed: BTreeSet<CourseId> = completed.into_iter().collect();
        let enrolled = enrolled
            .into_iter()
            .filter(|id| !completed.contains(id))
            .collect();
        Self {
            enrolled,
            completed,
        }
    }

    #[must_use]
    pub fn status(&self, course: CourseId) -> CourseStatus {
        if self.completed.contains(&course) {
            CourseStatus::Completed
        } else if self.enrolled.contains(&course) {
            CourseStatus::Enrolled
        } else {
            CourseStatus::Available
        }
    }

    #[must_use]
    pub fn is_enrolled(&self, course: CourseId) -> bool {
        self.enrolled.contains(&course)
    }

    #[must_use]
    pub fn is_completed(&self, course: CourseId) -> bool {
        self.completed.contains(&course)
    }

    /// Courses in progress (enrolled, not yet completed), in id order.
    pub fn enrolled(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.enrolled.iter().copied()
    }

    /// Completed courses, in id order.
    pub fn completed(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.completed.iter().copied()
    }

    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enrolled.is_empty() && self.completed.is_empty()
    }
}
