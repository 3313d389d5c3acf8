//! Pure derivations for the progress dashboard.

use crate::catalog::Catalog;
use crate::model::{Course, CourseStatus, ProgressRecord};

/// Headline numbers for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    /// Enrolled plus completed.
    pub total_enrolled: usize,
    pub total_completed: usize,
    /// Enrolled but not completed.
    pub in_progress: usize,
    /// Whole percent in `0..=100`.
    pub completion_rate: u32,
    /// Sum of durations of completed courses known to the catalog.
    pub total_hours: u32,
}

impl ProgressStats {
    #[must_use]
    pub fn compute(record: &ProgressRecord, catalog: &Catalog) -> Self {
        let total_completed = record.completed_count();
        let in_progress = record.enrolled_count();
        let total_enrolled = total_completed + in_progress;
        let total_hours = record
            .completed()
            .filter_map(|id| catalog.get(id))
            .map(Course::duration_hours)
            .sum();

        Self {
            total_enrolled,
            total_completed,
            in_progress,
            completion_rate: completion_rate(total_completed, total_enrolled),
            total_hours,
        }
    }
}

/// `round(100 * completed / total)`, halves rounding up; 0 when `total` is 0.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = u64::try_from(completed.min(total)).unwrap_or(u64::MAX);
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    let rate = completed.saturating_mul(200).saturating_add(total) / total.saturating_mul(2);
    u32::try_from(rate).unwrap_or(100)
}

/// The catalog split by status. Each course lands in exactly one group,
/// catalog order preserved within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePartition<'a> {
    pub completed: Vec<&'a Course>,
    pub enrolled: Vec<&'a Course>,
    pub available: Vec<&'a Course>,
}

impl<'a> CoursePartition<'a> {
    /// Partition `catalog` for `record`; `None` (anonymous) puts everything in `available`.
    #[must_use]
    pub fn compute(catalog: &'a Catalog, record: Option<&ProgressRecord>) -> Self {
        let mut partition = Self::default();
        for course in catalog.iter() {
            let status = record.map_or(CourseStatus::Available, |r| r.status(course.id()));
            match status {
                CourseStatus::Completed => partition.completed.push(course),
                CourseStatus::Enrolled => partition.enrolled.push(course),
                CourseStatus::Available => partition.available.push(course),
            }
        }
        partition
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len() + self.enrolled.len() + self.available.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
