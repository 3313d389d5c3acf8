use edulearn_core::Catalog;
use edulearn_core::model::{Course, CourseId, CourseStatus, Session};

/// Characters of description shown on compact cards.
pub const EXCERPT_CHARS: usize = 100;

/// The button (or badge) a course card offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseAction {
    Enroll,
    Complete,
    Done,
}

impl CourseAction {
    #[must_use]
    pub fn for_status(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Available => CourseAction::Enroll,
            CourseStatus::Enrolled => CourseAction::Complete,
            CourseStatus::Completed => CourseAction::Done,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub placeholder: String,
    pub duration_label: String,
    pub level_label: &'static str,
    pub students_label: String,
    pub topics: Vec<String>,
    pub status: CourseStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub action: CourseAction,
}

#[must_use]
pub fn status_class(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Available => "course-status status-available",
        CourseStatus::Enrolled => "course-status status-enrolled",
        CourseStatus::Completed => "course-status status-completed",
    }
}

/// First `max_chars` characters followed by an ellipsis.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

#[must_use]
pub fn map_course_card(course: &Course, status: CourseStatus) -> CourseCardVm {
    let hours = course.duration_hours();
    CourseCardVm {
        id: course.id(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        excerpt: excerpt(course.description(), EXCERPT_CHARS),
        placeholder: course.placeholder().to_owned(),
        duration_label: if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        },
        level_label: course.level().label(),
        students_label: format!("{} students", course.student_count()),
        topics: course.topics().to_vec(),
        status,
        status_label: status.label(),
        status_class: status_class(status),
        action: CourseAction::for_status(status),
    }
}

/// Cards for the whole catalog, in catalog order, for the given session.
#[must_use]
pub fn map_course_cards(catalog: &Catalog, session: &Session) -> Vec<CourseCardVm> {
    catalog
        .iter()
        .map(|course| map_course_card(course, session.status(course.id())))
        .collect()
}
