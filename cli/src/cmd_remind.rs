// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, error::Error, sync::Arc, time::Duration};

use animo_core::notification::{
    Channel, Importance, Notification, NotificationReceiver, Notifier, Reminders, TokioAlarms,
};
use animo_core::{Activity, Animo, NotificationSettings};
use clap::{ArgMatches, Command};
use colored::Colorize;
use futures::StreamExt;
use jiff::civil::DateTime;

use crate::config::Config;
use crate::util::format_datetime;

/// Other processes write to the same database without waking our live
/// streams, so the store is also re-read on this period.
const RESYNC_INTERVAL: Duration = Duration::from_secs(30);

/// Prints notifications to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    permission: bool,
}

impl TerminalNotifier {
    pub fn new(permission: bool) -> Self {
        Self { permission }
    }
}

impl Notifier for TerminalNotifier {
    fn has_permission(&self) -> bool {
        self.permission
    }

    fn create_channels(&self, channels: &[Channel]) {
        for channel in channels {
            tracing::debug!(id = channel.id, name = channel.name, "notification channel registered");
        }
    }

    fn show(&self, notification: Notification) {
        let channel = format!("[{}]", notification.channel.name);
        let channel = match notification.channel.importance {
            Importance::High => channel.yellow(),
            Importance::Default => channel.dimmed(),
        };
        println!(
            "🔔 {} {} {}",
            channel,
            notification.title.bold(),
            notification.message
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdRemind;

impl CmdRemind {
    pub const NAME: &str = "remind";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Run the reminder service, printing notifications until Ctrl-C")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdRemind
    }

    pub async fn run(self, animo: &mut Animo, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, ?config, "starting reminder service...");

        let notifier = Arc::new(TerminalNotifier::new(config.notifications));
        let alarms = Arc::new(TokioAlarms::new(NotificationReceiver::new(notifier.clone())));
        let reminders = animo.reminders(alarms, notifier);
        reminders.register_channels();
        if !config.notifications {
            println!(
                "{} notifications are disabled in the config, reminders will not be shown",
                "Warning:".yellow()
            );
        }

        let settings_repo = animo.settings();
        let activity_repo = animo.activities();
        let mut settings_stream = Box::pin(settings_repo.watch());
        let mut activity_stream = activity_repo.watch_all();
        let mut resync = tokio::time::interval(RESYNC_INTERVAL);
        resync.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut sync = ReminderSync::new(reminders);
        let mut settings = settings_repo.get().await?;
        let mut activities = Vec::new();

        println!("Reminder service running, press Ctrl-C to stop");
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                Some(item) = settings_stream.next() => settings = item?,
                Some(item) = activity_stream.next() => activities = item?,
                _ = resync.tick() => {
                    settings = settings_repo.get().await?;
                    activities = activity_repo.list_all().await?;
                }
            }

            animo.refresh_now();
            sync.sync(&activities, &settings, animo.now());
        }

        println!("Stopped, {} reminders dropped", sync.reminders.pending().len());
        Ok(())
    }
}

/// Keeps the registered alarms in line with the stored activities and settings.
#[derive(Debug)]
struct ReminderSync {
    reminders: Reminders,
    /// Activities with a registered reminder, by id, with the time they were scheduled for.
    scheduled: HashMap<i64, DateTime>,
    summary: Option<bool>,
}

impl ReminderSync {
    fn new(reminders: Reminders) -> Self {
        Self {
            reminders,
            scheduled: HashMap::new(),
            summary: None,
        }
    }

    fn sync(&mut self, activities: &[Activity], settings: &NotificationSettings, now: DateTime) {
        let wanted: HashMap<i64, &Activity> = activities
            .iter()
            .filter(|a| settings.allows(a.kind))
            .map(|a| (a.id, a))
            .collect();

        let reminders = &self.reminders;
        self.scheduled.retain(|id, _| {
            let keep = wanted.contains_key(id);
            if !keep {
                reminders.cancel_activity(*id);
            }
            keep
        });

        for (id, activity) in wanted {
            if self.scheduled.get(&id) == Some(&activity.date_time) {
                continue;
            }

            if self.reminders.schedule_activity(activity, now) {
                println!(
                    "Reminder set for {} at {}",
                    activity.title.bold(),
                    format_datetime(activity.date_time)
                );
                self.scheduled.insert(id, activity.date_time);
            } else if self.scheduled.remove(&id).is_some() {
                self.reminders.cancel_activity(id);
            }
        }

        if self.summary != Some(settings.summary) {
            if let Some(at) = self.reminders.set_daily_summary(settings.summary, now) {
                println!("Daily summary set for {}", format_datetime(at));
            }
            self.summary = Some(settings.summary);
        }
    }
}
