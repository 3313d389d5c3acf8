use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CourseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id must be > 0")]
    InvalidId,

    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course duration must be > 0 hours")]
    InvalidDuration,
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty band shown on course cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    duration_hours: u32,
    level: CourseLevel,
    student_count: u32,
    topics: Vec<String>,
    placeholder: String,
}

impl Course {
    /// Builds a course record.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::InvalidId` for id 0, `CourseError::EmptyTitle` for a
    /// blank title and `CourseError::InvalidDuration` for a zero-hour course.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_hours: u32,
        level: CourseLevel,
        student_count: u32,
        topics: Vec<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, CourseError> {
        if id.value() == 0 {
            return Err(CourseError::InvalidId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if duration_hours == 0 {
            return Err(CourseError::InvalidDuration);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            duration_hours,
            level,
            student_count,
            topics,
            placeholder: placeholder.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    #[must_use]
    pub fn level(&self) -> CourseLevel {
        self.level
    }

    #[must_use]
    pub fn student_count(&self) -> u32 {
        self.student_count
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Short label drawn in place of a course image.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
