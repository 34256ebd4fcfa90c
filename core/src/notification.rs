// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Reminder scheduling and notification delivery.
//!
//! [`Reminders`] computes when alarms should fire and hands them to an
//! [`AlarmService`]. When an alarm fires the service calls the
//! [`NotificationReceiver`], which renders the text and posts it through a
//! [`Notifier`] if notifications are permitted.

mod alarm;
mod channel;
mod receiver;

use std::fmt;
use std::sync::Arc;

use jiff::SignedDuration;
use jiff::civil::{DateTime, Time, time};

pub use crate::notification::alarm::{Alarm, AlarmIntent, AlarmKey, AlarmService, TokioAlarms};
pub use crate::notification::channel::{
    APPOINTMENTS, CHANNELS, Channel, DAILY_SUMMARY, Importance, MEDICATIONS,
};
pub use crate::notification::receiver::{
    Notification, NotificationReceiver, Notifier, REMINDER_TITLE, render,
};
#[cfg(test)]
pub(crate) use crate::notification::receiver::tests::RecordingNotifier;
use crate::Activity;

/// Default time between a reminder and its activity.
pub const DEFAULT_REMINDER_LEAD: SignedDuration = SignedDuration::from_hours(1);

/// Default local time of the daily summary.
pub const DEFAULT_DAILY_SUMMARY_AT: Time = time(20, 0, 0, 0);

const DAY: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// Schedules and cancels activity reminders and the daily summary.
#[derive(Clone)]
pub struct Reminders {
    alarms: Arc<dyn AlarmService>,
    notifier: Arc<dyn Notifier>,
    lead: SignedDuration,
    daily_summary_at: Time,
}

impl Reminders {
    pub fn new(alarms: Arc<dyn AlarmService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            alarms,
            notifier,
            lead: DEFAULT_REMINDER_LEAD,
            daily_summary_at: DEFAULT_DAILY_SUMMARY_AT,
        }
    }

    pub fn with_lead(mut self, lead: SignedDuration) -> Self {
        self.lead = lead;
        self
    }

    pub fn with_daily_summary_at(mut self, at: Time) -> Self {
        self.daily_summary_at = at;
        self
    }

    /// Registers every notification channel with the notifier.
    pub fn register_channels(&self) {
        self.notifier.create_channels(&CHANNELS);
    }

    /// Schedules the reminder for `activity`, one lead time before it.
    ///
    /// Nothing is scheduled when that moment is not after `now` or when
    /// notifications are not permitted. Returns whether an alarm was set.
    pub fn schedule_activity(&self, activity: &Activity, now: DateTime) -> bool {
        if !self.notifier.has_permission() {
            tracing::debug!(id = activity.id, "notification permission missing, not scheduling");
            return false;
        }

        let fire_at = match reminder_time(activity, self.lead) {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(id = activity.id, err = %e, "cannot compute reminder time");
                return false;
            }
        };
        let Some(delay) = delay_until(now, fire_at) else {
            tracing::debug!(id = activity.id, %fire_at, "reminder time already passed");
            return false;
        };

        self.alarms.set(Alarm {
            intent: AlarmIntent::ActivityReminder {
                activity_id: activity.id,
                activity_title: activity.title.clone(),
                activity_type: activity.kind.to_string(),
            },
            fire_at,
            delay,
            repeat: None,
        });
        true
    }

    /// Cancels the reminder of the activity, if one is pending.
    pub fn cancel_activity(&self, activity_id: i64) {
        self.alarms.cancel(AlarmKey::activity_reminder(activity_id));
    }

    /// Enables or disables the repeating daily summary.
    ///
    /// Returns the first firing when enabled.
    pub fn set_daily_summary(&self, enable: bool, now: DateTime) -> Option<DateTime> {
        if !enable {
            tracing::debug!("disabling daily summary");
            self.alarms.cancel(AlarmKey::daily_summary());
            return None;
        }

        let fire_at = match next_daily_summary(now, self.daily_summary_at) {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(err = %e, "cannot compute next daily summary");
                return None;
            }
        };
        let delay = delay_until(now, fire_at)?;

        tracing::debug!(%fire_at, "enabling daily summary");
        self.alarms.set(Alarm {
            intent: AlarmIntent::DailySummary,
            fire_at,
            delay,
            repeat: Some(DAY),
        });
        Some(fire_at)
    }

    /// Alarms that have not fired yet.
    pub fn pending(&self) -> Vec<Alarm> {
        self.alarms.pending()
    }
}

impl fmt::Debug for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reminders")
            .field("lead", &self.lead)
            .field("daily_summary_at", &self.daily_summary_at)
            .finish_non_exhaustive()
    }
}

/// The moment the reminder of `activity` is due.
pub fn reminder_time(activity: &Activity, lead: SignedDuration) -> Result<DateTime, jiff::Error> {
    activity.date_time.checked_sub(lead)
}

/// The next daily summary strictly after `now`: today at `at`, or tomorrow.
pub fn next_daily_summary(now: DateTime, at: Time) -> Result<DateTime, jiff::Error> {
    let today = now.date().to_datetime(at);
    if today > now {
        Ok(today)
    } else {
        Ok(now.date().tomorrow()?.to_datetime(at))
    }
}

/// Time from `now` to `at`, if `at` is in the future.
fn delay_until(now: DateTime, at: DateTime) -> Option<std::time::Duration> {
    let delay = now.duration_until(at);
    if delay.is_positive() {
        std::time::Duration::try_from(delay).ok()
    } else {
        None
    }
}
