// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;

use crate::NotificationSettings;
use crate::notification::Reminders;
use crate::preferences::{Theme, ThemePreferences};
use crate::repository::SettingsRepository;
use crate::viewmodel::{Collector, local_now, mark_ready, spawn_write, wait_ready};

/// Notification flags and appearance preferences.
#[derive(Debug)]
pub struct SettingsViewModel {
    repo: SettingsRepository,
    preferences: ThemePreferences,
    reminders: Option<Reminders>,
    state: Arc<State>,
    _collector: Collector,
}

#[derive(Debug)]
struct State {
    settings: watch::Sender<NotificationSettings>,
    ready: watch::Sender<bool>,
}

impl SettingsViewModel {
    pub fn new(repo: SettingsRepository, preferences: ThemePreferences) -> Self {
        let state = Arc::new(State {
            settings: watch::Sender::new(NotificationSettings::default()),
            ready: watch::Sender::new(false),
        });
        let collector = Collector::spawn(collect(repo.clone(), state.clone()));
        Self {
            repo,
            preferences,
            reminders: None,
            state,
            _collector: collector,
        }
    }

    /// Toggles the daily summary alarm together with its flag.
    pub fn with_reminders(mut self, reminders: Reminders) -> Self {
        self.reminders = Some(reminders);
        self
    }

    pub fn settings(&self) -> watch::Receiver<NotificationSettings> {
        self.state.settings.subscribe()
    }

    pub fn theme(&self) -> watch::Receiver<Theme> {
        self.preferences.watch()
    }

    pub async fn ready(&self) {
        wait_ready(&self.state.ready).await
    }

    pub fn set_appointments(&self, enabled: bool) {
        self.update("set appointments", move |s| s.appointments = enabled);
    }

    pub fn set_medications(&self, enabled: bool) {
        self.update("set medications", move |s| s.medications = enabled);
    }

    /// Sets the summary flag and enables or disables the daily summary alarm.
    pub fn set_summary(&self, enabled: bool) {
        let (repo, reminders) = (self.repo.clone(), self.reminders.clone());
        spawn_write("set summary", async move {
            let mut settings = repo.get().await?;
            settings.summary = enabled;
            repo.save(&settings).await?;

            if let Some(reminders) = reminders {
                reminders.set_daily_summary(enabled, local_now());
            }
            Ok(())
        });
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        let preferences = self.preferences.clone();
        spawn_write("set dark mode", async move {
            preferences.set_dark_mode(enabled).await
        });
    }

    pub fn set_dynamic_color(&self, enabled: bool) {
        let preferences = self.preferences.clone();
        spawn_write("set dynamic color", async move {
            preferences.set_dynamic_color(enabled).await
        });
    }

    /// Overwrites the singleton row with the current settings changed by `f`.
    fn update(&self, op: &'static str, f: impl FnOnce(&mut NotificationSettings) + Send + 'static) {
        let repo = self.repo.clone();
        spawn_write(op, async move {
            let mut settings = repo.get().await?;
            f(&mut settings);
            repo.save(&settings).await
        });
    }
}

async fn collect(repo: SettingsRepository, state: Arc<State>) {
    let mut settings = Box::pin(repo.watch());
    while let Some(item) = settings.next().await {
        match item {
            Ok(s) => {
                state.settings.send_replace(s);
            }
            Err(e) => tracing::error!(err = %e, "failed to load notification settings"),
        }
        mark_ready(&state.ready);
    }
}
