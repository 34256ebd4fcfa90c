// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Thin repositories over the local store.
//!
//! Apart from the account sequences in [`UserRepository`] and the default
//! row of [`SettingsRepository`], every method forwards to one accessor.
//! Multi-step sequences run statement by statement without a transaction.

use futures::{Stream, StreamExt};

use crate::localdb::{Activities, LiveStream, LocalDb, Pets, Settings, Users};
use crate::{Activity, NotificationSettings, Pet, Result, User};

#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Users,
}

impl UserRepository {
    pub fn new(db: &LocalDb) -> Self {
        Self {
            users: db.users.clone(),
        }
    }

    /// Registers a user and makes it the only logged-in one.
    ///
    /// Registering an email that already exists logs that user in instead of
    /// creating a duplicate. Returns the id of the logged-in user.
    pub async fn register_user(&self, name: &str, email: &str) -> Result<i64> {
        tracing::debug!(email, "registering user");
        self.users.logout_all().await?;

        if let Some(existing) = self.users.get_by_email(email).await? {
            tracing::info!(id = existing.id, "email already registered, logging in");
            self.users.login(existing.id).await?;
            return Ok(existing.id);
        }

        let user = User {
            is_logged_in: true,
            ..User::new(name, email)
        };
        Ok(self.users.insert(&user).await?)
    }

    /// Logs in the user with the given email.
    ///
    /// Returns `false` and leaves the session untouched when no user has that email.
    pub async fn login_user(&self, email: &str) -> Result<bool> {
        tracing::debug!(email, "logging in");
        match self.users.get_by_email(email).await? {
            Some(user) => {
                self.users.logout_all().await?;
                self.users.login(user.id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn logout_user(&self) -> Result<()> {
        Ok(self.users.logout_all().await?)
    }

    pub async fn update_user(&self, user: &User) -> Result<()> {
        Ok(self.users.update(user).await?)
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        Ok(self.users.delete(id).await?)
    }

    pub async fn logged_in_user(&self) -> Result<Option<User>> {
        Ok(self.users.get_logged_in().await?)
    }

    pub fn watch_logged_in_user(&self) -> LiveStream<Option<User>> {
        self.users.watch_logged_in()
    }
}

#[derive(Debug, Clone)]
pub struct PetRepository {
    pets: Pets,
}

impl PetRepository {
    pub fn new(db: &LocalDb) -> Self {
        Self {
            pets: db.pets.clone(),
        }
    }

    pub fn watch_all(&self) -> LiveStream<Vec<Pet>> {
        self.pets.watch_all()
    }

    pub fn watch_first(&self) -> LiveStream<Option<Pet>> {
        self.pets.watch_first()
    }

    pub async fn list_all(&self) -> Result<Vec<Pet>> {
        Ok(self.pets.list_all().await?)
    }

    pub async fn first(&self) -> Result<Option<Pet>> {
        Ok(self.pets.first().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Pet>> {
        Ok(self.pets.get(id).await?)
    }

    pub async fn insert(&self, pet: &Pet) -> Result<i64> {
        Ok(self.pets.insert(pet).await?)
    }

    pub async fn update(&self, pet: &Pet) -> Result<()> {
        Ok(self.pets.update(pet).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Ok(self.pets.delete(id).await?)
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.pets.count().await?)
    }
}

#[derive(Debug, Clone)]
pub struct ActivityRepository {
    activities: Activities,
}

impl ActivityRepository {
    pub fn new(db: &LocalDb) -> Self {
        Self {
            activities: db.activities.clone(),
        }
    }

    pub fn watch_all(&self) -> LiveStream<Vec<Activity>> {
        self.activities.watch_all()
    }

    pub fn watch_by_pet(&self, pet_id: i64) -> LiveStream<Vec<Activity>> {
        self.activities.watch_by_pet(pet_id)
    }

    pub async fn list_all(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.list_all().await?)
    }

    pub async fn list_by_pet(&self, pet_id: i64) -> Result<Vec<Activity>> {
        Ok(self.activities.list_by_pet(pet_id).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Activity>> {
        Ok(self.activities.get(id).await?)
    }

    pub async fn insert(&self, activity: &Activity) -> Result<i64> {
        Ok(self.activities.insert(activity).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Ok(self.activities.delete(id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    settings: Settings,
}

impl SettingsRepository {
    pub fn new(db: &LocalDb) -> Self {
        Self {
            settings: db.settings.clone(),
        }
    }

    /// Reads the settings, writing the defaults first if the row is missing.
    pub async fn get(&self) -> Result<NotificationSettings> {
        if let Some(settings) = self.settings.get().await? {
            return Ok(settings);
        }

        tracing::debug!("no notification settings stored yet, writing defaults");
        let settings = NotificationSettings::default();
        self.settings.insert(&settings).await?;
        Ok(settings)
    }

    /// Overwrites the singleton row.
    pub async fn save(&self, settings: &NotificationSettings) -> Result<()> {
        Ok(self.settings.insert(settings).await?)
    }

    /// Live settings, defaults while no row exists.
    pub fn watch(&self) -> impl Stream<Item = Result<NotificationSettings>> + Send + 'static {
        self.settings
            .watch()
            .map(|a| -> Result<NotificationSettings> { Ok(a?.unwrap_or_default()) })
    }
}
