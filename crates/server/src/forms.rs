//! Form contracts and their validation.
//!
//! Each form is a static record type deserialized from the request body
//! plus an explicit `validate` step. Missing fields deserialize as empty
//! strings so a short body is a validation failure, not a rejected
//! request. The only rule in force is "required, non-empty"; anything
//! else, password included, passes through untouched.

use serde::Deserialize;

const REQUIRED: &str = "This field is required.";

/// Field-level validation failures, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.0.push((field, message.to_owned()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message attached to `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    /// One user-visible notice per failed field.
    pub fn notices(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect()
    }
}

/// The index and homepage form: a name and a message.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NameMessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug)]
pub struct ValidNameMessage {
    pub name: String,
    pub message: String,
}

impl NameMessageForm {
    pub fn validate(&self) -> Result<ValidNameMessage, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.is_empty() {
            errors.push("name", REQUIRED);
        }
        if self.message.is_empty() {
            errors.push("message", REQUIRED);
        }

        if errors.is_empty() {
            Ok(ValidNameMessage {
                name: self.name.clone(),
                message: self.message.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// The login form: a username and a password.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug)]
pub struct ValidLogin {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<ValidLogin, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.is_empty() {
            errors.push("username", REQUIRED);
        }
        if self.password.is_empty() {
            errors.push("password", REQUIRED);
        }

        if errors.is_empty() {
            Ok(ValidLogin {
                username: self.username.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}
