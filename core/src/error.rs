// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::activity::ParseActivityTypeError;

/// Errors produced by the Animo core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failure reported by the SQLite store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The schema could not be brought up to date.
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A form was submitted with invalid fields; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An activity type name outside the closed set.
    #[error(transparent)]
    InvalidActivityType(#[from] ParseActivityTypeError),

    /// A date-time that could not be parsed, formatted or computed.
    #[error("Invalid date time: {0}")]
    InvalidDateTime(#[from] jiff::Error),

    /// I/O error while touching the state directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file is not valid JSON.
    #[error("Invalid preferences: {0}")]
    Preferences(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used across the Animo core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Field validation errors raised before any write is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The value does not look like an email address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
