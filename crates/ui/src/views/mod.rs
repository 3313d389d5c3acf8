pub mod actions;
mod course_card;
mod courses;
mod home;
mod modals;
mod notifications;
mod progress;
mod state;

#[cfg(test)]
mod action_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course_card::CourseCard;
pub use courses::CoursesView;
pub use home::HomeView;
pub use modals::AuthModals;
pub use notifications::{AchievementBanner, NotificationStack};
pub use progress::ProgressView;
pub use state::{ModalKind, UiState, ViewError, use_ui_state_provider};
