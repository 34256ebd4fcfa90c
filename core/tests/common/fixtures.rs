// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;
use std::sync::Mutex;

use animo_core::notification::{Channel, Notification, Notifier};
use animo_core::{Activity, ActivityType, Config, Pet};
use jiff::civil::DateTime;

/// Creates a test configuration storing its state in `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

/// Creates a not yet stored pet with the required fields only.
#[must_use]
pub fn test_pet(name: &str, breed: &str) -> Pet {
    Pet::new(name, breed)
}

/// Creates a not yet stored activity.
#[must_use]
pub fn test_activity(kind: ActivityType, title: &str, at: DateTime, pet_id: i64) -> Activity {
    Activity::new(kind, title, at, pet_id)
}

/// Today's local date at the given hour.
#[must_use]
pub fn today_at(hour: i8) -> DateTime {
    jiff::Zoned::now().date().at(hour, 0, 0, 0)
}

/// Notifier that records what it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub denied: bool,
    pub shown: Mutex<Vec<Notification>>,
    pub channels: Mutex<Vec<Channel>>,
}

impl RecordingNotifier {
    #[allow(dead_code)]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn has_permission(&self) -> bool {
        !self.denied
    }

    fn create_channels(&self, channels: &[Channel]) {
        self.channels.lock().unwrap().extend_from_slice(channels);
    }

    fn show(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}
