mod course_vm;
mod notification_vm;
mod progress_vm;
mod time_fmt;

pub use course_vm::{
    CourseAction, CourseCardVm, EXCERPT_CHARS, excerpt, map_course_card, map_course_cards,
    status_class,
};
pub use notification_vm::{
    ACHIEVEMENT_VISIBLE_MS, Achievement, GENERIC_FAILURE, NoticeId, NotificationCenter,
    TOAST_FADE_MS, TOAST_VISIBLE_MS, TickCursor, TimerHandle, Toast, ToastKind, ToastPhase,
};
pub use progress_vm::{ProgressPageVm, ProgressStatsVm, map_progress_page};
pub use time_fmt::format_date;
