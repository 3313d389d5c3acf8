use edulearn_core::Catalog;
use edulearn_core::model::{CourseStatus, Session, SignInKind, User};
use edulearn_core::stats::{CoursePartition, ProgressStats};

use crate::vm::course_vm::{CourseCardVm, map_course_card};
use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStatsVm {
    pub total_enrolled: usize,
    pub total_completed: usize,
    pub completion_rate: String,
    pub total_hours: u32,
}

impl From<ProgressStats> for ProgressStatsVm {
    fn from(stats: ProgressStats) -> Self {
        Self {
            total_enrolled: stats.total_enrolled,
            total_completed: stats.total_completed,
            completion_rate: format!("{}%", stats.completion_rate),
            total_hours: stats.total_hours,
        }
    }
}

/// Everything the progress page shows for a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressPageVm {
    pub user_name: String,
    /// `Member since <date>` after a signup, `Signed in <date>` after a login.
    pub signed_in_label: String,
    pub stats: ProgressStatsVm,
    pub completed: Vec<CourseCardVm>,
    pub enrolled: Vec<CourseCardVm>,
    pub available: Vec<CourseCardVm>,
}

fn signed_in_label(user: &User) -> String {
    let date = format_date(user.signed_in_at());
    match user.kind() {
        SignInKind::Signup => format!("Member since {date}"),
        SignInKind::Login => format!("Signed in {date}"),
    }
}

/// Returns `None` for anonymous sessions.
#[must_use]
pub fn map_progress_page(catalog: &Catalog, session: &Session) -> Option<ProgressPageVm> {
    let user = session.current_user()?;
    let record = session.current_progress()?;
    let partition = CoursePartition::compute(catalog, Some(record));
    let cards = |group: &[&edulearn_core::model::Course], status: CourseStatus| {
        group
            .iter()
            .map(|course| map_course_card(course, status))
            .collect::<Vec<_>>()
    };

    Some(ProgressPageVm {
        user_name: user.name().to_owned(),
        signed_in_label: signed_in_label(user),
        stats: ProgressStats::compute(record, catalog).into(),
        completed: cards(&partition.completed, CourseStatus::Completed),
        enrolled: cards(&partition.enrolled, CourseStatus::Enrolled),
        available: cards(&partition.available, CourseStatus::Available),
    })
}
