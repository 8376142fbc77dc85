//! Auth/session gate service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    auth::{
        errors::AuthServiceError,
        models::{PendingAdd, Session, UserRecord},
        validate::{LoginForm, SignupForm, validate_login, validate_signup},
    },
    storage::{RecordStore, StorageError},
};

/// Durable-store key holding the list of registered users.
pub const USERS_KEY: &str = "auth_users";

/// Durable-store key holding the single active session.
pub const SESSION_KEY: &str = "auth_session";

/// Transient-store key holding the single pending add.
pub const PENDING_ADD_KEY: &str = "pendingAdd";

/// Auth service backed by the local record stores: user records and the
/// session live in the durable store, the pending add in the
/// session-scoped one.
#[derive(Clone)]
pub struct LocalAuthService {
    durable: Arc<dyn RecordStore>,
    transient: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for LocalAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAuthService").finish_non_exhaustive()
    }
}

impl LocalAuthService {
    #[must_use]
    pub fn new(durable: Arc<dyn RecordStore>, transient: Arc<dyn RecordStore>) -> Self {
        Self { durable, transient }
    }

    fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let users = match self.durable.get(USERS_KEY)? {
            // A corrupted user list reads as empty.
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(users)
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<(), StorageError> {
        self.durable.put(USERS_KEY, serde_json::to_value(users)?)
    }

    fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let target = email.trim().to_lowercase();

        Ok(self
            .load_users()?
            .into_iter()
            .find(|u| u.email_lower == target))
    }

    fn start_session(&self, user: &UserRecord) -> Result<Session, AuthServiceError> {
        let session = Session {
            user_id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            started_at: Timestamp::now(),
        };

        self.durable
            .put(SESSION_KEY, serde_json::to_value(&session).map_err(StorageError::from)?)?;

        Ok(session)
    }
}

impl AuthService for LocalAuthService {
    #[tracing::instrument(skip(self, form))]
    fn register(&self, form: &SignupForm) -> Result<Session, AuthServiceError> {
        let errors = validate_signup(form);
        if !errors.is_empty() {
            return Err(AuthServiceError::Validation(errors));
        }

        if self.find_user(&form.email)?.is_some() {
            return Err(AuthServiceError::EmailTaken);
        }

        let email = form.email.trim().to_owned();
        let user = UserRecord {
            id: Uuid::now_v7(),
            full_name: form.full_name.trim().to_owned(),
            email_lower: email.to_lowercase(),
            email,
            password: form.password.clone(),
            created_at: Timestamp::now(),
        };

        let mut users = self.load_users()?;
        users.push(user.clone());
        self.save_users(&users)?;

        tracing::info!(user_id = %user.id, "registered new account");

        self.start_session(&user)
    }

    #[tracing::instrument(skip(self, form))]
    fn login(&self, form: &LoginForm) -> Result<Session, AuthServiceError> {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return Err(AuthServiceError::Validation(errors));
        }

        let Some(user) = self.find_user(&form.email)? else {
            return Err(AuthServiceError::AccountNotFound);
        };

        if user.password != form.password {
            return Err(AuthServiceError::IncorrectPassword);
        }

        self.start_session(&user)
    }

    fn logout(&self) -> Result<(), AuthServiceError> {
        self.durable.remove(SESSION_KEY)?;

        Ok(())
    }

    fn current_session(&self) -> Result<Option<Session>, AuthServiceError> {
        let session = match self.durable.get(SESSION_KEY)? {
            // A corrupted session record reads as logged out.
            Some(value) => serde_json::from_value(value).ok(),
            None => None,
        };

        Ok(session)
    }

    fn stash_pending_add(&self, pending: &PendingAdd) -> Result<(), AuthServiceError> {
        self.transient
            .put(PENDING_ADD_KEY, serde_json::to_value(pending).map_err(StorageError::from)?)?;

        Ok(())
    }

    fn take_pending_add(&self) -> Result<Option<PendingAdd>, AuthServiceError> {
        let Some(value) = self.transient.get(PENDING_ADD_KEY)? else {
            return Ok(None);
        };

        // Read-and-delete: the stash is consumed whether or not it parses.
        self.transient.remove(PENDING_ADD_KEY)?;

        Ok(parse_pending(value))
    }

    fn peek_pending_add(&self) -> Result<Option<PendingAdd>, AuthServiceError> {
        let pending = match self.transient.get(PENDING_ADD_KEY)? {
            Some(value) => parse_pending(value),
            None => None,
        };

        Ok(pending)
    }
}

fn parse_pending(value: Value) -> Option<PendingAdd> {
    serde_json::from_value(value).ok()
}

/// The storefront's authentication gate.
#[automock]
pub trait AuthService: Send + Sync {
    /// Validates the signup form, records the user, and starts a session.
    fn register(&self, form: &SignupForm) -> Result<Session, AuthServiceError>;

    /// Validates the login form and starts a session for the matching user.
    fn login(&self, form: &LoginForm) -> Result<Session, AuthServiceError>;

    /// Ends the active session; a no-op when logged out.
    fn logout(&self) -> Result<(), AuthServiceError>;

    /// The active session, if one exists.
    fn current_session(&self) -> Result<Option<Session>, AuthServiceError>;

    /// Whether a session record exists.
    fn is_authed(&self) -> bool {
        matches!(self.current_session(), Ok(Some(_)))
    }

    /// Stashes a deferred add; a later stash replaces an earlier one.
    fn stash_pending_add(&self, pending: &PendingAdd) -> Result<(), AuthServiceError>;

    /// Consumes the stashed add exactly once.
    fn take_pending_add(&self) -> Result<Option<PendingAdd>, AuthServiceError>;

    /// Reads the stashed add without consuming it.
    fn peek_pending_add(&self) -> Result<Option<PendingAdd>, AuthServiceError>;
}
