use crate::error::{DashboardError, FieldError, Result};
use serde::Deserialize;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetForm {
    pub email: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if self.confirm_password.is_empty() {
            errors.push(FieldError::new(
                "confirm_password",
                "password confirmation is required",
            ));
        } else if self.confirm_password != self.password {
            errors.push(FieldError::new("confirm_password", "passwords must match"));
        }

        finish(errors)
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        finish(errors)
    }
}

impl PasswordResetForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        finish(errors)
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    } else if !is_well_formed_email(email) {
        errors.push(FieldError::new("email", "enter a valid email address"));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::Validation(errors))
    }
}

/// Minimal well-formedness check: one `@` with a non-empty local part and a
/// dotted domain. The provider does its own authoritative validation.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
