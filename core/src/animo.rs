// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use jiff::civil::DateTime;
use tokio::fs;

use crate::localdb::LocalDb;
use crate::notification::{AlarmService, Notifier, Reminders};
use crate::preferences::{PREFERENCES_FILE, ThemePreferences};
use crate::repository::{ActivityRepository, PetRepository, SettingsRepository, UserRepository};
use crate::viewmodel::{ActivityViewModel, PetViewModel, SettingsViewModel, UserViewModel};
use crate::{Config, Error, Result, user};

/// File name of the database inside the state directory.
pub const DATABASE_FILE: &str = "animo.db";

/// Animo pet care application core.
#[derive(Debug, Clone)]
pub struct Animo {
    now: DateTime,
    config: Config,
    db: LocalDb,
    preferences: ThemePreferences,
}

impl Animo {
    /// Creates a new Animo instance with the given configuration.
    ///
    /// Without a state directory the database and the preferences live in memory.
    pub async fn new(mut config: Config) -> Result<Self> {
        let now = jiff::Zoned::now().datetime();

        config.normalize()?;
        prepare(&config).await?;

        let db_path = config.state_dir.as_ref().map(|a| a.join(DATABASE_FILE));
        let db = LocalDb::open(db_path.as_deref())
            .await
            .map_err(|e| Error::Config(format!("Failed to initialize db: {e}")))?;

        let prefs_path = config.state_dir.as_ref().map(|a| a.join(PREFERENCES_FILE));
        let preferences = ThemePreferences::open(prefs_path.as_deref()).await?;

        Ok(Self {
            now,
            config,
            db,
            preferences,
        })
    }

    /// The current time in the Animo instance.
    pub fn now(&self) -> DateTime {
        self.now
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = jiff::Zoned::now().datetime();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(&self.db)
    }

    pub fn pets(&self) -> PetRepository {
        PetRepository::new(&self.db)
    }

    pub fn activities(&self) -> ActivityRepository {
        ActivityRepository::new(&self.db)
    }

    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(&self.db)
    }

    pub fn preferences(&self) -> &ThemePreferences {
        &self.preferences
    }

    /// Reminder dispatcher using the configured lead time and summary time.
    pub fn reminders(&self, alarms: Arc<dyn AlarmService>, notifier: Arc<dyn Notifier>) -> Reminders {
        Reminders::new(alarms, notifier)
            .with_lead(self.config.reminder_lead.0)
            .with_daily_summary_at(self.config.daily_summary_at.0)
    }

    pub fn pet_view_model(&self) -> PetViewModel {
        PetViewModel::new(self.pets())
    }

    pub fn activity_view_model(&self, reminders: Option<Reminders>) -> ActivityViewModel {
        let vm = ActivityViewModel::new(self.activities(), self.settings());
        match reminders {
            Some(r) => vm.with_reminders(r),
            None => vm,
        }
    }

    pub fn settings_view_model(&self, reminders: Option<Reminders>) -> SettingsViewModel {
        let vm = SettingsViewModel::new(self.settings(), self.preferences.clone());
        match reminders {
            Some(r) => vm.with_reminders(r),
            None => vm,
        }
    }

    pub fn user_view_model(&self) -> UserViewModel {
        UserViewModel::new(self.users())
    }

    /// Validates the form and registers the user, logging it in.
    pub async fn register(&self, name: &str, email: &str) -> Result<i64> {
        let (name, email) = (name.trim(), email.trim());
        user::validate_registration(name, email)?;
        self.users().register_user(name, email).await
    }

    /// Validates the email and logs in its user. Returns `false` for an unknown email.
    pub async fn login(&self, email: &str) -> Result<bool> {
        let email = email.trim();
        user::validate_email(email)?;
        self.users().login_user(email).await
    }

    /// Close the Animo instance, saving any changes to the database.
    pub async fn close(self) -> Result<()> {
        self.db.close().await;
        Ok(())
    }
}

async fn prepare(config: &Config) -> Result<()> {
    if let Some(parent) = &config.state_dir {
        tracing::debug!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
