// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use crate::ActivityType;
use crate::notification::alarm::AlarmIntent;
use crate::notification::channel::{self, Channel};

/// Title of every activity reminder.
pub const REMINDER_TITLE: &str = "Pet Care Reminder";

/// A notification ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    /// Posting id, a newer notification with the same id replaces the older one.
    pub id: i64,
    pub channel: Channel,
    pub title: String,
    pub message: String,
}

/// The platform side of notifications.
pub trait Notifier: Send + Sync {
    /// Whether the user allowed notifications to be shown.
    fn has_permission(&self) -> bool;

    /// Registers the channels notifications are posted to.
    fn create_channels(&self, channels: &[Channel]);

    /// Posts the notification.
    fn show(&self, notification: Notification);
}

/// Turns fired alarms into notifications.
#[derive(Clone)]
pub struct NotificationReceiver {
    notifier: Arc<dyn Notifier>,
}

impl NotificationReceiver {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Handles a fired alarm. Without notification permission this does nothing.
    pub fn on_receive(&self, intent: &AlarmIntent) {
        let notification = render(intent);
        if !self.notifier.has_permission() {
            tracing::debug!(id = notification.id, "notification permission missing, dropping");
            return;
        }

        tracing::debug!(id = notification.id, channel = notification.channel.id, "posting notification");
        self.notifier.show(notification);
    }
}

impl fmt::Debug for NotificationReceiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationReceiver").finish_non_exhaustive()
    }
}

/// Builds the notification shown for the alarm.
pub fn render(intent: &AlarmIntent) -> Notification {
    match intent {
        AlarmIntent::ActivityReminder {
            activity_id,
            activity_title,
            activity_type,
        } => {
            let kind = activity_type
                .parse::<ActivityType>()
                .unwrap_or(ActivityType::Appointment);
            let title = match activity_title.as_str() {
                "" => "Activity",
                t => t,
            };

            Notification {
                id: *activity_id,
                channel: Channel::for_activity(kind),
                title: REMINDER_TITLE.to_string(),
                message: reminder_message(kind, title),
            }
        }
        AlarmIntent::DailySummary => Notification {
            id: AlarmIntent::DAILY_SUMMARY_ID,
            channel: channel::DAILY_SUMMARY,
            title: "Daily Summary".to_string(),
            message: "Check your pet's activity summary for today".to_string(),
        },
    }
}

fn reminder_message(kind: ActivityType, title: &str) -> String {
    match kind {
        ActivityType::Appointment => format!("Your appointment '{title}' is in 1 hour"),
        ActivityType::Vaccination => format!("Vaccination reminder: {title} in 1 hour"),
        ActivityType::Medication => format!("Time for medication: {title} in 1 hour"),
        ActivityType::Walk | ActivityType::Meal => format!("Reminder: {title} in 1 hour"),
    }
}
