mod course;
mod ids;
mod progress;
mod session;
mod user;

pub use ids::CourseId;

pub use course::{Course, CourseError, CourseLevel};
pub use progress::{CourseStatus, ProgressRecord};
pub use session::{ProgressMap, Session};
pub use user::{SignInKind, User, ValidationError, display_name_for};
