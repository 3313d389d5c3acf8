use chrono::{DateTime, Utc};
use thiserror::Error;

/// A required login/signup field was blank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("name cannot be empty")]
    EmptyName,
}

/// How the user's current session was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInKind {
    Login,
    Signup,
}

/// The signed-in person. Identified by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
    name: String,
    kind: SignInKind,
    signed_in_at: DateTime<Utc>,
}

impl User {
    /// Builds a user, trimming surrounding whitespace from email and name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` or `ValidationError::EmptyName` for blank fields.
    pub fn new(
        email: &str,
        name: &str,
        kind: SignInKind,
        signed_in_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let email = non_blank(email).ok_or(ValidationError::EmptyEmail)?;
        let name = non_blank(name).ok_or(ValidationError::EmptyName)?;
        Ok(Self {
            email: email.to_owned(),
            name: name.to_owned(),
            kind,
            signed_in_at,
        })
    }

    /// Builds a user from a login where no display name was given.
    ///
    /// The name falls back to the local part of the email, or the whole email
    /// when the local part is empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` for a blank email.
    pub fn from_login(email: &str, signed_in_at: DateTime<Utc>) -> Result<Self, ValidationError> {
        let email = non_blank(email).ok_or(ValidationError::EmptyEmail)?;
        Self::new(email, display_name_for(email), SignInKind::Login, signed_in_at)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SignInKind {
        self.kind
    }

    #[must_use]
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

/// Display name derived from an email address.
#[must_use]
pub fn display_name_for(email: &str) -> &str {
    let email = email.trim();
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => email,
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
