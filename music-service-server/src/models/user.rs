//! User input

use serde::Deserialize;

use super::validation::required;
use super::ValidationError;

/// Body of `POST /users`
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Validated user ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(req: CreateUserRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("username", req.username)?,
            email: required("email", req.email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
