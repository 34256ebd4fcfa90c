// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder scheduling driven through the facade.

use std::sync::Arc;

use animo_core::notification::{AlarmIntent, AlarmKey, CHANNELS, NotificationReceiver, TokioAlarms};
use animo_core::{ActivityType, Animo};
use jiff::civil::date;

use crate::common::{RecordingNotifier, setup_temp_dirs, test_activity, test_config, test_pet};

#[tokio::test]
async fn reminders_follow_activity_lifecycle() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let alarms = Arc::new(TokioAlarms::new(NotificationReceiver::new(notifier.clone())));
    let reminders = animo.reminders(alarms, notifier.clone());
    reminders.register_channels();

    let rex = animo.pets().insert(&test_pet("Rex", "Labrador")).await.unwrap();
    let vet = test_activity(ActivityType::Appointment, "Vet", date(2030, 1, 1).at(10, 0, 0, 0), rex);
    let id = animo.activities().insert(&vet).await.unwrap();
    let stored = animo.activities().get(id).await.unwrap().unwrap();

    // Act
    let now = date(2029, 12, 31).at(9, 0, 0, 0);
    assert!(reminders.schedule_activity(&stored, now));
    assert!(reminders.schedule_activity(&stored, now), "rescheduling replaces");

    // Assert
    let pending = reminders.pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].key(), AlarmKey::activity_reminder(id));
    assert_eq!(pending[0].fire_at, date(2030, 1, 1).at(9, 0, 0, 0));
    assert_eq!(
        pending[0].intent,
        AlarmIntent::ActivityReminder {
            activity_id: id,
            activity_title: "Vet".to_string(),
            activity_type: "APPOINTMENT".to_string(),
        }
    );
    assert_eq!(*notifier.channels.lock().unwrap(), CHANNELS.to_vec());

    // Act - deleting cancels by the same key
    animo.activities().delete(id).await.unwrap();
    reminders.cancel_activity(id);
    assert!(reminders.pending().is_empty());
}

#[tokio::test]
async fn reminders_skip_inside_lead_window() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let animo = Animo::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let alarms = Arc::new(TokioAlarms::new(NotificationReceiver::new(notifier.clone())));
    let reminders = animo.reminders(alarms, notifier);

    // Act
    let now = date(2030, 1, 1).at(9, 30, 0, 0);
    let soon = test_activity(ActivityType::Medication, "Pill", date(2030, 1, 1).at(10, 0, 0, 0), 1);

    // Assert
    assert!(!reminders.schedule_activity(&soon, now));
    assert!(reminders.pending().is_empty());
}
