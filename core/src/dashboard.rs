// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers behind the dashboard and schedule views.

use jiff::civil::{Date, DateTime};

use crate::{Activity, ActivityType, Pet, User};

/// Number of upcoming activities shown on the dashboard.
pub const UPCOMING_LIMIT: usize = 5;

/// Activities on the given calendar date, in their original order.
pub fn activities_on(activities: &[Activity], date: Date) -> Vec<&Activity> {
    activities.iter().filter(|a| a.date() == date).collect()
}

/// Future appointments, vaccinations and medications, soonest first.
pub fn upcoming_important(activities: &[Activity], now: DateTime, limit: usize) -> Vec<&Activity> {
    let mut upcoming: Vec<_> = activities
        .iter()
        .filter(|a| a.date_time > now && a.kind.is_important())
        .collect();
    upcoming.sort_by_key(|a| a.date_time);
    upcoming.truncate(limit);
    upcoming
}

/// Headline of an upcoming activity card.
pub const fn upcoming_headline(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::Appointment => "Next Appointment",
        ActivityType::Vaccination => "Upcoming Vaccination",
        ActivityType::Medication => "Medication Reminder",
        ActivityType::Walk | ActivityType::Meal => "Upcoming Activity",
    }
}

/// Walk and meal counts of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DailySummary {
    pub walks: usize,
    pub meals: usize,
}

impl DailySummary {
    /// Meals a pet is expected to have per day.
    pub const MEAL_GOAL: usize = 2;

    /// Counts the walks and meals of `activities` that happened on `date`.
    pub fn from_activities(activities: &[Activity], date: Date) -> Self {
        activities
            .iter()
            .filter(|a| a.date() == date)
            .fold(Self::default(), |mut acc, a| {
                match a.kind {
                    ActivityType::Walk => acc.walks += 1,
                    ActivityType::Meal => acc.meals += 1,
                    _ => {}
                }
                acc
            })
    }
}

/// Sorts the activities by date-time and groups them by calendar date.
///
/// The sort is stable, activities at the same moment keep their relative order.
pub fn group_by_date(activities: &[Activity]) -> Vec<(Date, Vec<&Activity>)> {
    let mut sorted: Vec<_> = activities.iter().collect();
    sorted.sort_by_key(|a| a.date_time);

    let mut groups: Vec<(Date, Vec<&Activity>)> = Vec::new();
    for activity in sorted {
        match groups.last_mut() {
            Some((date, group)) if *date == activity.date() => group.push(activity),
            _ => groups.push((activity.date(), vec![activity])),
        }
    }
    groups
}

/// Dashboard header: a greeting for the user and a line naming the pet.
pub fn greeting(user: Option<&User>, pet: Option<&Pet>) -> (String, String) {
    let user = user.map_or("User", |u| u.name.as_str());
    let pet = pet.map_or("your pet", |p| p.name.as_str());
    (format!("Good morning, {user}"), format!("For {pet} 🐾"))
}
