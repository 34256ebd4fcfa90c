// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows that depend on configuration values.

use std::sync::Arc;

use animo_core::notification::{NotificationReceiver, TokioAlarms};
use animo_core::{ActivityType, Animo, Config, DATABASE_FILE, PREFERENCES_FILE};
use jiff::civil::date;

use crate::common::{
    RecordingNotifier, assert_file_exists, setup_temp_dirs, test_activity, test_config,
};

#[tokio::test]
async fn config_driven_reminder_lead_and_summary_time() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config: Config = toml::from_str(&format!(
        r#"
        state_dir = "{}"
        reminder_lead = "30m"
        daily_summary_at = "07:45"
        "#,
        temp_dirs.state_dir.display()
    ))
    .unwrap();
    let animo = Animo::new(config).await.unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let alarms = Arc::new(TokioAlarms::new(NotificationReceiver::new(notifier.clone())));
    let reminders = animo.reminders(alarms, notifier);

    // Act
    let now = date(2030, 1, 1).at(8, 0, 0, 0);
    let walk = test_activity(ActivityType::Walk, "Walk", date(2030, 1, 1).at(12, 0, 0, 0), 1);
    reminders.schedule_activity(&walk, now);
    let summary = reminders.set_daily_summary(true, now);

    // Assert
    assert_eq!(summary, Some(date(2030, 1, 2).at(7, 45, 0, 0)));
    let fire_times: Vec<_> = reminders.pending().iter().map(|a| a.fire_at).collect();
    assert!(fire_times.contains(&date(2030, 1, 1).at(11, 30, 0, 0)));
    assert!(fire_times.contains(&date(2030, 1, 2).at(7, 45, 0, 0)));

    reminders.set_daily_summary(false, now);
    assert_eq!(reminders.pending().len(), 1);
}

#[tokio::test]
async fn config_driven_state_dir_is_created() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let state_dir = temp_dirs.state_dir.join("nested").join("animo");

    // Act
    let animo = Animo::new(test_config(&state_dir)).await.unwrap();
    animo.preferences().set_dynamic_color(false).await.unwrap();
    animo.close().await.unwrap();

    // Assert
    assert_file_exists(&state_dir.join(DATABASE_FILE));
    assert_file_exists(&state_dir.join(PREFERENCES_FILE));
}
