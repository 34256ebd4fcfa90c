// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::civil::{Date, DateTime};

/// Format used to persist activity date-times, an ISO local timestamp without offset.
pub const STABLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Kind of a logged or scheduled activity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    /// A walk.
    Walk,

    /// A meal.
    Meal,

    /// A dose of medication.
    #[cfg_attr(feature = "clap", clap(alias = "meds"))]
    Medication,

    /// A vet appointment.
    Appointment,

    /// A vaccination.
    Vaccination,
}

impl ActivityType {
    /// All activity types, in declaration order.
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Walk,
        ActivityType::Meal,
        ActivityType::Medication,
        ActivityType::Appointment,
        ActivityType::Vaccination,
    ];

    /// The persisted name of the type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Walk => "WALK",
            ActivityType::Meal => "MEAL",
            ActivityType::Medication => "MEDICATION",
            ActivityType::Appointment => "APPOINTMENT",
            ActivityType::Vaccination => "VACCINATION",
        }
    }

    /// Human readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            ActivityType::Walk => "Walk",
            ActivityType::Meal => "Meal",
            ActivityType::Medication => "Medication",
            ActivityType::Appointment => "Appointment",
            ActivityType::Vaccination => "Vaccination",
        }
    }

    /// Whether activities of this type show up as upcoming items on the dashboard.
    pub const fn is_important(&self) -> bool {
        matches!(
            self,
            ActivityType::Appointment | ActivityType::Vaccination | ActivityType::Medication
        )
    }
}

impl AsRef<str> for ActivityType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ParseActivityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseActivityTypeError(s.to_string()))
    }
}

/// Error returned when a string is not one of the persisted activity type names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown activity type: {0}")]
pub struct ParseActivityTypeError(pub String);

/// An activity linked to a pet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    /// Store assigned id, `0` until inserted.
    pub id: i64,

    /// The kind of activity.
    #[serde(rename = "type")]
    pub kind: ActivityType,

    /// Short title.
    pub title: String,

    /// Local date and time the activity happened or is scheduled for.
    pub date_time: DateTime,

    /// Owning pet.
    pub pet_id: i64,
}

impl Activity {
    /// Creates a not yet stored activity.
    pub fn new(kind: ActivityType, title: impl Into<String>, date_time: DateTime, pet_id: i64) -> Self {
        Self {
            id: 0,
            kind,
            title: title.into(),
            date_time,
            pet_id,
        }
    }

    /// The calendar date of the activity.
    pub fn date(&self) -> Date {
        self.date_time.date()
    }
}

/// One-tap logging shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum QuickLog {
    Walk,
    Meal,
    #[cfg_attr(feature = "clap", clap(alias = "medication"))]
    Meds,
}

impl QuickLog {
    pub const fn kind(self) -> ActivityType {
        match self {
            QuickLog::Walk => ActivityType::Walk,
            QuickLog::Meal => ActivityType::Meal,
            QuickLog::Meds => ActivityType::Medication,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            QuickLog::Walk => "Quick Walk",
            QuickLog::Meal => "Meal",
            QuickLog::Meds => "Medication",
        }
    }

    /// Builds the activity logged for `pet_id` at `now`.
    pub fn activity(self, pet_id: i64, now: DateTime) -> Activity {
        Activity::new(self.kind(), self.title(), now, pet_id)
    }
}

pub(crate) fn format_stable(dt: &DateTime) -> String {
    dt.strftime(STABLE_FORMAT).to_string()
}

pub(crate) fn parse_stable(s: &str) -> Result<DateTime, jiff::Error> {
    DateTime::strptime(STABLE_FORMAT, s)
}
