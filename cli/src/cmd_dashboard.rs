// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::Animo;
use animo_core::dashboard::{
    DailySummary, UPCOMING_LIMIT, activities_on, greeting, upcoming_headline, upcoming_important,
};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::activity_formatter::{ActivityColumn, ActivityFormatter};
use crate::arg::CommonArgs;
use crate::cmd_activity::load_activities;
use crate::cmd_pet::resolve_pet;
use crate::util::format_datetime;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard {
    pub pet: Option<i64>,
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard: today's summary, today's activities and what is coming up")
            .arg(CommonArgs::pet())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            pet: CommonArgs::get_pet(matches),
        }
    }

    /// Show the dashboard of the selected pet.
    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let users = animo.user_view_model();
        let pet = resolve_pet(animo, self.pet).await?;
        users.ready().await;
        let user = users.user().borrow().clone();

        let (hello, subtitle) = greeting(user.as_ref(), pet.as_ref());
        println!("{}", hello.bold());
        println!("{}", subtitle.italic());
        println!();

        let Some(pet) = pet else {
            println!("{}", "No pets yet, add one with `animo pet new`".italic());
            return Ok(());
        };

        let activities = load_activities(animo, Some(pet.id)).await;
        let now = animo.now();
        let today = now.date();

        let summary = DailySummary::from_activities(&activities, today);
        println!("📊 {}", "Today's Summary".bold());
        println!("  Walks  {}", summary.walks);
        println!("  Meals  {} / {}", summary.meals, DailySummary::MEAL_GOAL);
        println!();

        println!("🐾 {}", "Today's Activities".bold());
        let todays = activities_on(&activities, today);
        if todays.is_empty() {
            println!("{}", "No activities today".italic());
        } else {
            let formatter = ActivityFormatter::new(vec![
                ActivityColumn::Time,
                ActivityColumn::Type,
                ActivityColumn::Title,
            ]);
            println!("{}", formatter.format(&todays));
        }
        println!();

        println!("🗓️ {}", "Upcoming".bold());
        let upcoming = upcoming_important(&activities, now, UPCOMING_LIMIT);
        if upcoming.is_empty() {
            println!("{}", "Nothing important coming up".italic());
        }
        for activity in upcoming {
            println!(
                " {} {}: {} {}",
                "►".green(),
                upcoming_headline(activity.kind).italic(),
                activity.title,
                format_datetime(activity.date_time).dimmed()
            );
        }
        Ok(())
    }
}
