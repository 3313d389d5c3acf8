//! JSON shapes of the two persisted records.
//!
//! These mirror the domain types so the adapter can (de)serialize
//! without leaking storage concerns into `edulearn-core`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use edulearn_core::model::{
    CourseId, ProgressMap, ProgressRecord, SignInKind, User, ValidationError,
};
use serde::{Deserialize, Serialize};

/// `{"email", "name", "loginTime" | "signupTime"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_time: Option<DateTime<Utc>>,
}

impl UserRecord {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let (login_time, signup_time) = match user.kind() {
            SignInKind::Login => (Some(user.signed_in_at()), None),
            SignInKind::Signup => (None, Some(user.signed_in_at())),
        };
        Self {
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            login_time,
            signup_time,
        }
    }

    /// Convert back into a domain `User`.
    ///
    /// A record carrying neither timestamp is treated as a login at the Unix
    /// epoch; when both are present the signup stamp wins.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if email or name are blank.
    pub fn into_user(self) -> Result<User, ValidationError> {
        let (kind, at) = match (self.signup_time, self.login_time) {
            (Some(at), _) => (SignInKind::Signup, at),
            (None, Some(at)) => (SignInKind::Login, at),
            (None, None) => (SignInKind::Login, DateTime::<Utc>::UNIX_EPOCH),
        };
        User::new(&self.email, &self.name, kind, at)
    }
}

/// `{"enrolled": [ids], "completed": [ids]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default)]
    pub enrolled: Vec<CourseId>,
    #[serde(default)]
    pub completed: Vec<CourseId>,
}

impl ProgressEntry {
    #[must_use]
    pub fn from_record(record: &ProgressRecord) -> Self {
        Self {
            enrolled: record.enrolled().collect(),
            completed: record.completed().collect(),
        }
    }

    #[must_use]
    pub fn into_record(self) -> ProgressRecord {
        ProgressRecord::from_persisted(self.enrolled, self.completed)
    }
}

/// Email → entry, as stored under the progress key.
pub type ProgressEntries = BTreeMap<String, ProgressEntry>;

#[must_use]
pub fn entries_from_map(progress: &ProgressMap) -> ProgressEntries {
    progress
        .iter()
        .map(|(email, record)| (email.clone(), ProgressEntry::from_record(record)))
        .collect()
}

#[must_use]
pub fn map_from_entries(entries: ProgressEntries) -> ProgressMap {
    entries
        .into_iter()
        .map(|(email, entry)| (email, entry.into_record()))
        .collect()
}
