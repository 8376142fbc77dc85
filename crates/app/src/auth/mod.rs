//! Mock authentication: user records, the active session, and the
//! pending-add gate.

mod errors;
mod models;
mod service;
mod validate;

pub use errors::AuthServiceError;
pub use models::{PendingAdd, PendingAddSource, Session, UserRecord};
pub use service::{
    AuthService, LocalAuthService, MockAuthService, PENDING_ADD_KEY, SESSION_KEY, USERS_KEY,
};
pub use validate::{FieldError, LoginForm, SignupForm, validate_login, validate_signup};
