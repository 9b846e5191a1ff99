//! Auth Payloads
//!
//! Login and registration bodies, plus the login response.

use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationResult};

/// `POST /auth/login/` body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login/` response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
}

/// `POST /auth/register/` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration form as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// True once something was typed in the confirmation field and it differs
    pub fn passwords_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required("Username"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl Credentials {
    pub fn validate(&self) -> ValidationResult<()> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required("Username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(())
    }
}
