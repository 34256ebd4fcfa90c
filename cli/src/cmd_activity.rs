// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::{Activity, ActivityType, Animo, QuickLog};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::activity_formatter::ActivityFormatter;
use crate::arg::{ActivityArgs, CommonArgs};
use crate::cmd_pet::resolve_pet;
use crate::util::{OutputFormat, format_datetime, parse_datetime};

/// Loads the activities of one pet, or of all pets with `None`, sorted by date-time.
pub async fn load_activities(animo: &Animo, pet_id: Option<i64>) -> Vec<Activity> {
    let vm = animo.activity_view_model(None);
    vm.set_selected_pet(pet_id);
    vm.ready().await;
    vm.activities().borrow().clone()
}

#[derive(Debug, Clone)]
pub struct CmdActivityNew {
    pub title: String,
    pub kind: ActivityType,
    pub at: String,
    pub pet: Option<i64>,
}

impl CmdActivityNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new activity")
            .arg(ActivityArgs::title())
            .arg(ActivityArgs::kind())
            .arg(ActivityArgs::at())
            .arg(CommonArgs::pet())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: ActivityArgs::get_title(matches),
            kind: ActivityArgs::get_kind(matches),
            at: ActivityArgs::get_at(matches),
            pet: CommonArgs::get_pet(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new activity...");

        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required for new activity".into());
        }
        let date_time = parse_datetime(&self.at, animo.now())?;
        let Some(pet) = resolve_pet(animo, self.pet).await? else {
            return Err("No pet to add the activity to, add one with `animo pet new`".into());
        };

        let activity = Activity::new(self.kind, title, date_time, pet.id);
        let id = animo.activities().insert(&activity).await?;
        println!(
            "Added {} {} for {} at {} (id {})",
            activity.kind.label().to_lowercase(),
            activity.title.bold(),
            pet.name,
            format_datetime(activity.date_time),
            id
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdActivityList {
    pub pet: Option<i64>,
    pub output_format: OutputFormat,
}

impl CmdActivityList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List activities, of all pets unless one is given")
            .arg(CommonArgs::pet())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            pet: CommonArgs::get_pet(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing activities...");

        let activities = load_activities(animo, self.pet).await;
        if activities.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No activities found".italic());
            return Ok(());
        }

        let refs: Vec<_> = activities.iter().collect();
        let formatter = ActivityFormatter::list().with_output_format(self.output_format);
        println!("{}", formatter.format(&refs));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdActivityDelete {
    pub ids: Vec<i64>,
}

impl CmdActivityDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete activities")
            .arg(CommonArgs::ids("activity"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: CommonArgs::get_ids(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting activities...");

        let activities = animo.activities();
        for id in self.ids {
            match activities.get(id).await? {
                Some(activity) => {
                    activities.delete(id).await?;
                    println!("Deleted {}", activity.title.bold());
                }
                None => println!("{} activity {} not found", "Skipped:".yellow(), id),
            }
        }
        Ok(())
    }
}

/// One-tap logging of an activity happening now.
#[derive(Debug, Clone, Copy)]
pub struct CmdLog {
    pub what: QuickLog,
    pub pet: Option<i64>,
}

impl CmdLog {
    pub const NAME: &str = "log";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Log a walk, a meal or medication for the selected pet, right now")
            .arg(
                arg!(what: <WHAT> "What to log")
                    .value_parser(value_parser!(QuickLog)),
            )
            .arg(CommonArgs::pet())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            what: *matches.get_one("what").expect("what is required"),
            pet: CommonArgs::get_pet(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "quick logging...");

        let Some(pet) = resolve_pet(animo, self.pet).await? else {
            return Err("No pet selected, add one with `animo pet new`".into());
        };

        let activity = self.what.activity(pet.id, animo.now());
        animo.activities().insert(&activity).await?;
        println!("{} {} for {}", "Logged".green(), activity.title.bold(), pet.name);
        Ok(())
    }
}
