// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::ActivityType;

/// How intrusive notifications of a channel are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Default,
    High,
}

/// A notification channel with a fixed identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Importance,
    pub vibrate: bool,
}

pub const APPOINTMENTS: Channel = Channel {
    id: "appointments_channel",
    name: "Appointment Reminders",
    description: "Reminders for upcoming appointments and vaccinations",
    importance: Importance::High,
    vibrate: true,
};

pub const MEDICATIONS: Channel = Channel {
    id: "medications_channel",
    name: "Medication Reminders",
    description: "Reminders for medication times",
    importance: Importance::High,
    vibrate: true,
};

pub const DAILY_SUMMARY: Channel = Channel {
    id: "daily_summary_channel",
    name: "Daily Summary",
    description: "Daily activity summary for your pets",
    importance: Importance::Default,
    vibrate: false,
};

/// Every channel, registered once at startup.
pub const CHANNELS: [Channel; 3] = [APPOINTMENTS, MEDICATIONS, DAILY_SUMMARY];

impl Channel {
    /// The channel reminders for `kind` are posted to.
    pub const fn for_activity(kind: ActivityType) -> Channel {
        match kind {
            ActivityType::Appointment | ActivityType::Vaccination => APPOINTMENTS,
            ActivityType::Medication => MEDICATIONS,
            ActivityType::Walk | ActivityType::Meal => DAILY_SUMMARY,
        }
    }
}
