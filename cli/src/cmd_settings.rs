// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::{Animo, NotificationSettings, Theme};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::util::OutputFormat;

const APPOINTMENTS: &str = "appointments";
const MEDICATIONS: &str = "medications";
const SUMMARY: &str = "summary";
const DARK_MODE: &str = "dark-mode";
const DYNAMIC_COLOR: &str = "dynamic-color";

/// Shows the settings, toggling the flags given first.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdSettings {
    pub appointments: Option<bool>,
    pub medications: Option<bool>,
    pub summary: Option<bool>,
    pub dark_mode: Option<bool>,
    pub dynamic_color: Option<bool>,
    pub output_format: OutputFormat,
}

impl CmdSettings {
    pub const NAME: &str = "settings";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show or change notification and appearance settings")
            .arg(CommonArgs::switch(APPOINTMENTS, "Appointment and vaccination reminders"))
            .arg(CommonArgs::switch(MEDICATIONS, "Medication reminders"))
            .arg(CommonArgs::switch(SUMMARY, "Daily activity summary"))
            .arg(CommonArgs::switch(DARK_MODE, "Dark theme"))
            .arg(CommonArgs::switch(DYNAMIC_COLOR, "Colors taken from the wallpaper"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            appointments: CommonArgs::get_switch(matches, APPOINTMENTS),
            medications: CommonArgs::get_switch(matches, MEDICATIONS),
            summary: CommonArgs::get_switch(matches, SUMMARY),
            dark_mode: CommonArgs::get_switch(matches, DARK_MODE),
            dynamic_color: CommonArgs::get_switch(matches, DYNAMIC_COLOR),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating settings...");

        if self.appointments.is_some() || self.medications.is_some() || self.summary.is_some() {
            let repo = animo.settings();
            let mut settings = repo.get().await?;
            settings.appointments = self.appointments.unwrap_or(settings.appointments);
            settings.medications = self.medications.unwrap_or(settings.medications);
            settings.summary = self.summary.unwrap_or(settings.summary);
            repo.save(&settings).await?;
        }

        let preferences = animo.preferences();
        if let Some(enabled) = self.dark_mode {
            preferences.set_dark_mode(enabled).await?;
        }
        if let Some(enabled) = self.dynamic_color {
            preferences.set_dynamic_color(enabled).await?;
        }

        let vm = animo.settings_view_model(None);
        vm.ready().await;
        let settings = *vm.settings().borrow();
        let theme = *vm.theme().borrow();

        match self.output_format {
            OutputFormat::Json => {
                let json = serde_json::json!({ "notifications": settings, "theme": theme });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Table => print_settings(&settings, &theme),
        }
        Ok(())
    }
}

fn print_settings(settings: &NotificationSettings, theme: &Theme) {
    let flag = |on: bool| match on {
        true => "on".green(),
        false => "off".red(),
    };

    println!("🔔 {}", "Notifications".bold());
    println!("  {:<14} {}", "Appointments", flag(settings.appointments));
    println!("  {:<14} {}", "Medications", flag(settings.medications));
    println!("  {:<14} {}", "Daily summary", flag(settings.summary));
    println!();
    println!("🎨 {}", "Appearance".bold());
    println!("  {:<14} {}", "Dark mode", flag(theme.dark_mode));
    println!("  {:<14} {}", "Dynamic color", flag(theme.dynamic_color));
}
