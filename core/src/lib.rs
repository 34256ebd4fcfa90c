// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Animo, a local pet care tracker: pets, their activities,
//! reminders and the view state built on top of a SQLite store.

mod activity;
mod animo;
mod config;
pub mod dashboard;
mod error;
pub mod localdb;
pub mod notification;
mod pet;
mod preferences;
pub mod repository;
mod settings;
mod user;
pub mod viewmodel;

pub use crate::activity::{Activity, ActivityType, ParseActivityTypeError, QuickLog, STABLE_FORMAT};
pub use crate::animo::{Animo, DATABASE_FILE};
pub use crate::config::{APP_NAME, Config, ConfigDuration, ConfigTime, expand_path, get_config_dir};
pub use crate::error::{Error, Result, ValidationError};
pub use crate::pet::{Pet, PetPatch};
pub use crate::preferences::{PREFERENCES_FILE, Theme, ThemePreferences};
pub use crate::settings::NotificationSettings;
pub use crate::user::{User, validate_email, validate_registration};
