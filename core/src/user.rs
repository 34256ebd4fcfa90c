// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use regex::Regex;

use crate::ValidationError;

/// A local account. No passwords, the email is the identity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store assigned id, `0` until inserted.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_logged_in: bool,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            is_logged_in: false,
        }
    }
}

/// Checks the email against the usual `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    const RE: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    if email.trim().is_empty() {
        Err(ValidationError::MissingField("email"))
    } else if re.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates the sign-up form: a name and a well-formed email.
pub fn validate_registration(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    validate_email(email)
}
