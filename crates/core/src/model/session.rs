use std::collections::BTreeMap;

use crate::model::{CourseId, CourseStatus, ProgressRecord, SignInKind, User};

/// Progress for every email ever seen, keyed by email.
pub type ProgressMap = BTreeMap<String, ProgressRecord>;

/// The current user (if any) plus all known progress records.
///
/// Whenever a user is signed in, a record for their email exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
    progress: ProgressMap,
}

impl Session {
    /// An anonymous session with no stored progress.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted state.
    ///
    /// A stored user without a matching record gets an empty one.
    #[must_use]
    pub fn from_persisted(current_user: Option<User>, mut progress: ProgressMap) -> Self {
        if let Some(user) = &current_user {
            progress.entry(user.email().to_owned()).or_default();
        }
        Self {
            current_user,
            progress,
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn progress_for(&self, email: &str) -> Option<&ProgressRecord> {
        self.progress.get(email)
    }

    /// The record of the signed-in user, or `None` when anonymous.
    #[must_use]
    pub fn current_progress(&self) -> Option<&ProgressRecord> {
        self.current_user
            .as_ref()
            .and_then(|user| self.progress.get(user.email()))
    }

    pub(crate) fn current_progress_mut(&mut self) -> Option<&mut ProgressRecord> {
        let email = self.current_user.as_ref()?.email().to_owned();
        Some(self.progress.entry(email).or_default())
    }

    /// Status of a course for the signed-in user. Anonymous sessions see every
    /// course as available.
    #[must_use]
    pub fn status(&self, course: CourseId) -> CourseStatus {
        self.current_progress()
            .map_or(CourseStatus::Available, |record| record.status(course))
    }

    /// Make `user` current.
    ///
    /// A login keeps an existing record; a signup always starts from an empty
    /// one. Returns the record that was replaced by a signup, if it held any
    /// progress.
    pub fn sign_in(&mut self, user: User) -> Option<ProgressRecord> {
        let email = user.email().to_owned();
        let discarded = match user.kind() {
            SignInKind::Login => {
                self.progress.entry(email).or_default();
                None
            }
            SignInKind::Signup => self
                .progress
                .insert(email, ProgressRecord::new())
                .filter(|old| !old.is_empty()),
        };
        self.current_user = Some(user);
        discarded
    }

    /// Clear the current user. Progress records stay.
    pub fn sign_out(&mut self) -> Option<User> {
        self.current_user.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn signup(email: &str, name: &str) -> User {
        User::new(email, name, SignInKind::Signup, fixed_now()).unwrap()
    }

    #[test]
    fn login_creates_empty_record_once() {
        let mut session = Session::anonymous();
        session.sign_in(User::from_login("a@x.com", fixed_now()).unwrap());
        assert_eq!(session.current_progress(), Some(&ProgressRecord::new()));
        assert_eq!(session.progress().len(), 1);
    }

    #[test]
    fn login_keeps_existing_record() {
        let mut progress = ProgressMap::new();
        progress.insert(
            "a@x.com".to_string(),
            ProgressRecord::from_persisted([CourseId::new(1)], []),
        );
        let mut session = Session::from_persisted(None, progress);
        session.sign_in(User::from_login("a@x.com", fixed_now()).unwrap());
        assert_eq!(session.status(CourseId::new(1)), CourseStatus::Enrolled);
    }

    #[test]
    fn signup_replaces_existing_record() {
        let mut progress = ProgressMap::new();
        progress.insert(
            "ann@x.com".to_string(),
            ProgressRecord::from_persisted([CourseId::new(1)], [CourseId::new(2)]),
        );
        let mut session = Session::from_persisted(None, progress);
        let discarded = session.sign_in(signup("ann@x.com", "Ann"));

        assert!(discarded.is_some());
        assert_eq!(session.current_user().map(User::name), Some("Ann"));
        assert_eq!(session.current_progress(), Some(&ProgressRecord::new()));
    }

    #[test]
    fn sign_out_retains_progress() {
        let mut session = Session::anonymous();
        session.sign_in(signup("ann@x.com", "Ann"));
        let previous = session.sign_out();

        assert_eq!(previous.map(|u| u.email().to_owned()), Some("ann@x.com".into()));
        assert!(session.current_progress().is_none());
        assert!(session.progress_for("ann@x.com").is_some());
    }

    #[test]
    fn from_persisted_backfills_missing_record() {
        let user = User::from_login("b@x.com", fixed_now()).unwrap();
        let session = Session::from_persisted(Some(user), ProgressMap::new());
        assert!(session.current_progress().is_some());
    }

    #[test]
    fn anonymous_sees_everything_available() {
        let session = Session::anonymous();
        assert_eq!(session.status(CourseId::new(1)), CourseStatus::Available);
    }
}
