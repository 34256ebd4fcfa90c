// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::{Animo, Pet};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::cmd_pet::resolve_pet;
use crate::pet_formatter::{format_age, format_weight};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdProfile {
    pub pet: Option<i64>,
    pub output_format: OutputFormat,
}

impl CmdProfile {
    pub const NAME: &str = "profile";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the full profile of the selected pet")
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
        tracing::debug!(?self, "showing profile...");

        let Some(pet) = resolve_pet(animo, self.pet).await? else {
            println!("{}", "No pets yet, add one with `animo pet new`".italic());
            return Ok(());
        };

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pet)?),
            OutputFormat::Table => print_profile(&pet),
        }
        Ok(())
    }
}

fn print_profile(pet: &Pet) {
    println!("{} {}", pet.name.bold(), format!("#{}", pet.id).dimmed());
    println!("{}", pet.breed.italic());

    let sections: [(&str, Vec<(&str, String)>); 3] = [
        (
            "Basic Information",
            vec![
                ("Age", format_age(pet.age)),
                ("Weight", format_weight(pet.weight)),
                ("Sex", pet.sex.clone()),
                ("Color", pet.color.clone()),
                ("Microchip", pet.microchip_id.clone()),
            ],
        ),
        (
            "Health",
            vec![
                ("Allergies", pet.allergies.clone()),
                ("Medications", pet.medications.clone()),
                ("Vet", pet.vet_name.clone()),
                ("Vet Phone", pet.vet_phone.clone()),
            ],
        ),
        ("Notes", vec![("Notes", pet.notes.clone())]),
    ];

    for (title, fields) in sections {
        println!();
        println!("{}", title.bold());
        for (label, value) in fields {
            let value = match value.is_empty() {
                true => "-".dimmed().to_string(),
                false => value,
            };
            println!("  {:<12} {}", label, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let cmd = Command::new("test").subcommand(CmdProfile::command());
        let matches = cmd
            .try_get_matches_from(["test", "profile", "--pet", "2", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("profile").unwrap();
        let parsed = CmdProfile::from(sub_matches);

        assert_eq!(parsed.pet, Some(2));
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }
}
