//! Login / Signup Credentials

use serde::Serialize;

use super::{require, ValidationError};

/// Body of `/api/login` and `/api/signup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}
