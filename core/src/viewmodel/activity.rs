// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;

use crate::Activity;
use crate::notification::Reminders;
use crate::repository::{ActivityRepository, SettingsRepository};
use crate::viewmodel::{Collector, local_now, spawn_write};

/// Activities of the selected pet, or of every pet when none is selected.
#[derive(Debug)]
pub struct ActivityViewModel {
    repo: ActivityRepository,
    settings: SettingsRepository,
    reminders: Option<Reminders>,
    state: Arc<State>,
    _collector: Collector,
}

#[derive(Debug)]
struct State {
    selected_pet_id: watch::Sender<Option<i64>>,
    activities: watch::Sender<Vec<Activity>>,
    /// The selection the current activities were loaded for, `None` before the first load.
    loaded: watch::Sender<Option<Option<i64>>>,
}

impl ActivityViewModel {
    pub fn new(repo: ActivityRepository, settings: SettingsRepository) -> Self {
        let state = Arc::new(State {
            selected_pet_id: watch::Sender::new(None),
            activities: watch::Sender::new(Vec::new()),
            loaded: watch::Sender::new(None),
        });
        let collector = Collector::spawn(collect(repo.clone(), state.clone()));
        Self {
            repo,
            settings,
            reminders: None,
            state,
            _collector: collector,
        }
    }

    /// Schedules and cancels reminders as activities are added and removed.
    pub fn with_reminders(mut self, reminders: Reminders) -> Self {
        self.reminders = Some(reminders);
        self
    }

    pub fn selected_pet_id(&self) -> watch::Receiver<Option<i64>> {
        self.state.selected_pet_id.subscribe()
    }

    /// Narrows the activities to one pet, or widens them to all with `None`.
    pub fn set_selected_pet(&self, pet_id: Option<i64>) {
        if *self.state.selected_pet_id.borrow() == pet_id {
            return;
        }

        self.state.selected_pet_id.send_replace(pet_id);
    }

    /// Activities sorted by date-time.
    pub fn activities(&self) -> watch::Receiver<Vec<Activity>> {
        self.state.activities.subscribe()
    }

    /// Resolves once the activities of the current selection are loaded.
    pub async fn ready(&self) {
        let mut loaded = self.state.loaded.subscribe();
        let selection = &self.state.selected_pet_id;
        // The sender outlives this call, so waiting cannot fail
        let _ = loaded
            .wait_for(|loaded| *loaded == Some(*selection.borrow()))
            .await;
    }

    /// Stores an activity and schedules its reminder.
    pub fn insert(&self, activity: Activity) {
        let (repo, settings, reminders) = (
            self.repo.clone(),
            self.settings.clone(),
            self.reminders.clone(),
        );
        spawn_write("insert activity", async move {
            let id = repo.insert(&activity).await?;
            let Some(reminders) = reminders else {
                return Ok(());
            };

            if !settings.get().await?.allows(activity.kind) {
                tracing::debug!(id, kind = %activity.kind, "reminders disabled for this type");
                return Ok(());
            }
            if let Some(stored) = repo.get(id).await? {
                reminders.schedule_activity(&stored, local_now());
            }
            Ok(())
        });
    }

    /// Deletes an activity and cancels its reminder.
    pub fn delete(&self, activity_id: i64) {
        let (repo, reminders) = (self.repo.clone(), self.reminders.clone());
        spawn_write("delete activity", async move {
            repo.delete(activity_id).await?;
            if let Some(reminders) = reminders {
                reminders.cancel_activity(activity_id);
            }
            Ok(())
        });
    }
}

/// Follows the stream of the current selection, switching when it changes.
async fn collect(repo: ActivityRepository, state: Arc<State>) {
    let mut selection = state.selected_pet_id.subscribe();
    loop {
        let pet_id = *selection.borrow_and_update();
        let mut activities = match pet_id {
            Some(id) => repo.watch_by_pet(id),
            None => repo.watch_all(),
        };

        loop {
            tokio::select! {
                biased;

                changed = selection.changed() => match changed {
                    Ok(()) => break,
                    Err(_) => return,
                },
                item = activities.next() => match item {
                    Some(Ok(_)) if selection.has_changed().unwrap_or(false) => break,
                    Some(Ok(list)) => {
                        state.activities.send_replace(list);
                        state.loaded.send_replace(Some(pet_id));
                    }
                    Some(Err(e)) => {
                        tracing::error!(?pet_id, err = %e, "failed to load activities");
                        state.loaded.send_replace(Some(pet_id));
                    }
                    None => return,
                },
            }
        }
    }
}
