use tokio::sync::Mutex;
use tracing::{error, info, warn};

use edulearn_core::Clock;
use edulearn_core::model::{ProgressRecord, Session, SignInKind, User, ValidationError};
use storage::repository::StorageError;
use storage::session_store::SessionStore;

use crate::error::AccountError;

/// Owns the in-memory session and writes it through to storage.
///
/// Every mutation runs while holding the session lock, persistence included,
/// so writes reach storage in the order they were applied. A failed write
/// leaves the in-memory change in place.
pub struct SessionService {
    clock: Clock,
    store: SessionStore,
    session: Mutex<Session>,
}

impl SessionService {
    /// Wrap an already-loaded session.
    #[must_use]
    pub fn new(clock: Clock, store: SessionStore, session: Session) -> Self {
        Self {
            clock,
            store,
            session: Mutex::new(session),
        }
    }

    /// Read persisted state once and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backend cannot be read.
    /// Malformed records do not fail; they load as defaults.
    pub async fn load(clock: Clock, store: SessionStore) -> Result<Self, StorageError> {
        let persisted = store.load().await?;
        let session = persisted.into_session();
        info!(
            signed_in = session.is_signed_in(),
            known_users = session.progress().len(),
            "session loaded"
        );
        Ok(Self::new(clock, store, session))
    }

    /// Sign in with email and password; the display name comes from the email.
    ///
    /// No credential check is made: any non-blank pair succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Validation` for blank fields (nothing changes),
    /// or `AccountError::Storage` if persisting fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        self.login_as(email, password, None).await
    }

    /// Sign in, optionally with an explicit display name.
    ///
    /// # Errors
    ///
    /// See [`SessionService::login`].
    pub async fn login_as(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<User, AccountError> {
        require_password(password)?;
        let now = self.clock.now();
        let user = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => User::new(email, name, SignInKind::Login, now)?,
            None => User::from_login(email, now)?,
        };
        self.sign_in(user).await
    }

    /// Create an account and sign in. Any existing progress for the email is
    /// replaced by an empty record.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Validation` for blank fields (nothing changes),
    /// or `AccountError::Storage` if persisting fails.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        require_password(password)?;
        let user = User::new(email, name, SignInKind::Signup, self.clock.now())?;
        self.sign_in(user).await
    }

    /// Clear the current user. Progress records are kept.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Storage` if persisting fails.
    pub async fn logout(&self) -> Result<(), AccountError> {
        let mut session = self.session.lock().await;
        if let Some(user) = session.sign_out() {
            info!(email = user.email(), "logged out");
        }
        persist(&self.store, &session).await?;
        Ok(())
    }

    /// The signed-in user's record, or `None` when anonymous.
    pub async fn current_progress(&self) -> Option<ProgressRecord> {
        self.session.lock().await.current_progress().cloned()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.lock().await.current_user().cloned()
    }

    /// A copy of the whole session for read-only rendering.
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Apply `mutate` and persist when it reports a change.
    ///
    /// Returns the mutation's result and a snapshot taken after it.
    pub(crate) async fn update<T>(
        &self,
        mutate: impl FnOnce(&mut Session) -> (T, bool),
    ) -> Result<(T, Session), StorageError> {
        let mut session = self.session.lock().await;
        let (result, changed) = mutate(&mut session);
        if changed {
            persist(&self.store, &session).await?;
        }
        Ok((result, session.clone()))
    }

    async fn sign_in(&self, user: User) -> Result<User, AccountError> {
        let mut session = self.session.lock().await;
        if let Some(discarded) = session.sign_in(user.clone()) {
            warn!(
                email = user.email(),
                enrolled = discarded.enrolled_count(),
                completed = discarded.completed_count(),
                "signup replaced existing progress"
            );
        }
        info!(email = user.email(), kind = ?user.kind(), "signed in");
        persist(&self.store, &session).await?;
        Ok(user)
    }
}

fn require_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

async fn persist(store: &SessionStore, session: &Session) -> Result<(), StorageError> {
    store.save_session(session).await.inspect_err(|err| {
        error!(%err, "failed to persist session");
    })
}
