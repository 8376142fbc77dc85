//! Form validation for login and signup.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => re,
        Err(_) => unreachable!("pattern is a valid literal"),
    }
});

// 2 to 50 characters: letters, spaces, hyphen, apostrophe.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[A-Za-z][A-Za-z\s'-]{1,49}$") {
        Ok(re) => re,
        Err(_) => unreachable!("pattern is a valid literal"),
    }
});

const EMAIL_MAX: usize = 254;

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_owned(),
        }
    }
}

/// Login form values.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form values.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validates the login form, returning one error per failing field.
pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let email = form.email.trim();

    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required."));
    } else if !EMAIL_RE.is_match(email) || email.len() > EMAIL_MAX {
        errors.push(FieldError::new(
            "email",
            "Enter a valid email (max 254 characters).",
        ));
    }

    if form.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required."));
    } else if form.password.len() < 8 || form.password.len() > 128 {
        errors.push(FieldError::new(
            "password",
            "Password must be 8-128 characters.",
        ));
    }

    errors
}

/// Validates the signup form, returning one error per failing field.
pub fn validate_signup(form: &SignupForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let full_name = form.full_name.trim();
    let email = form.email.trim();

    if full_name.is_empty() {
        errors.push(FieldError::new("fullName", "Full Name is required."));
    } else if !NAME_RE.is_match(full_name) {
        errors.push(FieldError::new(
            "fullName",
            "Use 2-50 letters, spaces, hyphen, apostrophe only.",
        ));
    }

    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required."));
    } else if !EMAIL_RE.is_match(email) || email.len() > EMAIL_MAX {
        errors.push(FieldError::new("email", "Enter a valid email (max 254)."));
    }

    if form.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required."));
    } else if !strong_password(&form.password) {
        errors.push(FieldError::new(
            "password",
            "8-64 chars, include upper, lower, digit & special.",
        ));
    }

    if form.confirm_password.is_empty() {
        errors.push(FieldError::new(
            "confirmPassword",
            "Please confirm your password.",
        ));
    } else if form.confirm_password != form.password {
        errors.push(FieldError::new("confirmPassword", "Passwords must match."));
    }

    errors
}

/// 8-64 characters with at least one lowercase letter, uppercase
/// letter, digit, and special character (anything outside word
/// characters and whitespace).
fn strong_password(password: &str) -> bool {
    let length = password.chars().count();
    if !(8..=64).contains(&length) {
        return false;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| !(c.is_alphanumeric() || c == '_' || c.is_whitespace()));

    has_lower && has_upper && has_digit && has_special
}
