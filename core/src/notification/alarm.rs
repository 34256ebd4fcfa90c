// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use jiff::civil::DateTime;
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at, sleep};

use crate::notification::receiver::NotificationReceiver;

/// Payload delivered to the receiver when an alarm fires.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmIntent {
    /// Reminder for an upcoming activity.
    ActivityReminder {
        activity_id: i64,
        activity_title: String,
        activity_type: String,
    },

    /// The repeating daily summary.
    DailySummary,
}

impl AlarmIntent {
    pub const ACTIVITY_REMINDER: &str = "ACTIVITY_REMINDER";
    pub const DAILY_SUMMARY: &str = "DAILY_SUMMARY";

    /// Fixed id of the daily summary alarm and notification.
    pub const DAILY_SUMMARY_ID: i64 = 999;

    pub fn action(&self) -> &'static str {
        match self {
            AlarmIntent::ActivityReminder { .. } => Self::ACTIVITY_REMINDER,
            AlarmIntent::DailySummary => Self::DAILY_SUMMARY,
        }
    }

    /// Alarms with equal keys replace each other.
    pub fn key(&self) -> AlarmKey {
        match self {
            AlarmIntent::ActivityReminder { activity_id, .. } => {
                AlarmKey::activity_reminder(*activity_id)
            }
            AlarmIntent::DailySummary => AlarmKey::daily_summary(),
        }
    }
}

/// Identity of a registered alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlarmKey {
    pub action: &'static str,
    pub id: i64,
}

impl AlarmKey {
    pub const fn activity_reminder(activity_id: i64) -> Self {
        Self {
            action: AlarmIntent::ACTIVITY_REMINDER,
            id: activity_id,
        }
    }

    pub const fn daily_summary() -> Self {
        Self {
            action: AlarmIntent::DAILY_SUMMARY,
            id: AlarmIntent::DAILY_SUMMARY_ID,
        }
    }
}

/// An alarm as handed to the [`AlarmService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub intent: AlarmIntent,

    /// Local wall-clock time of the first firing.
    pub fire_at: DateTime,

    /// Time from registration to the first firing.
    pub delay: Duration,

    /// Period of a repeating alarm.
    pub repeat: Option<Duration>,
}

impl Alarm {
    pub fn key(&self) -> AlarmKey {
        self.intent.key()
    }
}

/// The platform side of alarms.
pub trait AlarmService: Send + Sync {
    /// Registers the alarm, replacing any alarm with the same key.
    fn set(&self, alarm: Alarm);

    /// Cancels the alarm with the given key, if any.
    fn cancel(&self, key: AlarmKey);

    /// Alarms that have not fired yet, repeating alarms included.
    fn pending(&self) -> Vec<Alarm>;
}

/// Alarms run as timer tasks on the current tokio runtime.
///
/// One-shot alarms remove themselves once fired. All timers are aborted when
/// the service is dropped.
#[derive(Debug, Clone)]
pub struct TokioAlarms {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    receiver: NotificationReceiver,
    next_generation: AtomicU64,
    timers: Mutex<HashMap<AlarmKey, Timer>>,
}

#[derive(Debug)]
struct Timer {
    alarm: Alarm,
    generation: u64,
    handle: AbortHandle,
}

impl TokioAlarms {
    pub fn new(receiver: NotificationReceiver) -> Self {
        Self {
            inner: Arc::new(Inner {
                receiver,
                next_generation: AtomicU64::new(0),
                timers: Mutex::new(HashMap::new()),
            }),
        }
    }
}

impl AlarmService for TokioAlarms {
    /// Must be called from within a tokio runtime.
    fn set(&self, alarm: Alarm) {
        let key = alarm.key();
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(?key, fire_at = %alarm.fire_at, "setting alarm");

        // Spawn under the lock so a zero-delay timer cannot remove itself before it is recorded
        let mut timers = self.inner.lock();
        let handle = spawn_timer(
            self.inner.receiver.clone(),
            Arc::downgrade(&self.inner),
            (key, generation),
            alarm.clone(),
        );
        let previous = timers.insert(
            key,
            Timer {
                alarm,
                generation,
                handle,
            },
        );
        if let Some(previous) = previous {
            previous.handle.abort();
        }
    }

    fn cancel(&self, key: AlarmKey) {
        if let Some(timer) = self.inner.lock().remove(&key) {
            tracing::debug!(?key, "cancelling alarm");
            timer.handle.abort();
        }
    }

    fn pending(&self) -> Vec<Alarm> {
        let mut alarms: Vec<_> = self
            .inner
            .lock()
            .values()
            .map(|t| t.alarm.clone())
            .collect();
        alarms.sort_by_key(|a| (a.fire_at, a.key()));
        alarms
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, HashMap<AlarmKey, Timer>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let timers = self.timers.get_mut().unwrap_or_else(PoisonError::into_inner);
        for timer in timers.values() {
            timer.handle.abort();
        }
    }
}

fn spawn_timer(
    receiver: NotificationReceiver,
    inner: Weak<Inner>,
    (key, generation): (AlarmKey, u64),
    alarm: Alarm,
) -> AbortHandle {
    let task = async move {
        match alarm.repeat {
            None => {
                sleep(alarm.delay).await;
                receiver.on_receive(&alarm.intent);

                if let Some(inner) = inner.upgrade() {
                    let mut timers = inner.lock();
                    if timers.get(&key).is_some_and(|t| t.generation == generation) {
                        timers.remove(&key);
                    }
                }
            }
            Some(period) => {
                let mut ticker = interval_at(Instant::now() + alarm.delay, period);
                loop {
                    ticker.tick().await;
                    receiver.on_receive(&alarm.intent);
                }
            }
        }
    };
    tokio::spawn(task).abort_handle()
}
