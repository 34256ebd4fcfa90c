// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::Animo;
use animo_core::dashboard::group_by_date;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::activity_formatter::{ActivityColumn, ActivityFormatter};
use crate::arg::CommonArgs;
use crate::cmd_activity::load_activities;
use crate::cmd_pet::resolve_pet;
use crate::util::format_date_header;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdSchedule {
    pub pet: Option<i64>,
}

impl CmdSchedule {
    pub const NAME: &str = "schedule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the activities of the selected pet, grouped by date")
            .arg(CommonArgs::pet())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            pet: CommonArgs::get_pet(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating schedule...");

        let Some(pet) = resolve_pet(animo, self.pet).await? else {
            println!("{}", "No pets yet, add one with `animo pet new`".italic());
            return Ok(());
        };

        println!("🗓️ {} {}", "Schedule for".bold(), pet.name.bold());
        let activities = load_activities(animo, Some(pet.id)).await;
        if activities.is_empty() {
            println!("{}", "No activities scheduled".italic());
            return Ok(());
        }

        let formatter = ActivityFormatter::new(vec![
            ActivityColumn::Id,
            ActivityColumn::Time,
            ActivityColumn::Type,
            ActivityColumn::Title,
        ]);
        for (date, group) in group_by_date(&activities) {
            println!();
            println!(" {} {}", "►".green(), format_date_header(date).italic());
            println!("{}", formatter.format(&group));
        }
        Ok(())
    }
}
