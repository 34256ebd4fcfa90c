// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::ActivityType;

/// Which reminder categories are enabled. Stored as a singleton row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationSettings {
    /// Appointment and vaccination reminders.
    pub appointments: bool,

    /// Medication reminders.
    pub medications: bool,

    /// The repeating daily summary.
    pub summary: bool,
}

impl NotificationSettings {
    /// Fixed id of the singleton row.
    pub const ID: i64 = 1;

    /// Whether reminders for activities of `kind` are wanted.
    pub fn allows(&self, kind: ActivityType) -> bool {
        match kind {
            ActivityType::Appointment | ActivityType::Vaccination => self.appointments,
            ActivityType::Medication => self.medications,
            ActivityType::Walk | ActivityType::Meal => true,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            appointments: true,
            medications: true,
            summary: false,
        }
    }
}
