// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::{Animo, Pet, PetPatch};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{CommonArgs, PetArgs};
use crate::pet_formatter::PetFormatter;
use crate::util::OutputFormat;

/// Resolves the pet a screen works on: the given one, or the selected one.
pub async fn resolve_pet(animo: &Animo, pet_id: Option<i64>) -> Result<Option<Pet>, Box<dyn Error>> {
    if let Some(id) = pet_id {
        return match animo.pets().get(id).await? {
            Some(pet) => Ok(Some(pet)),
            None => Err(format!("Pet not found: {id}").into()),
        };
    }

    let pets = animo.pet_view_model();
    pets.ready().await;
    let selected = pets.selected_pet().borrow().clone();
    Ok(selected)
}

#[derive(Debug, Clone)]
pub struct CmdPetNew {
    pub name: String,
    pub patch: PetPatch,
}

impl CmdPetNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new pet")
            .arg(PetArgs::name(true))
            .arg(PetArgs::breed(true))
            .args(PetArgs::profile())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let mut patch = PetArgs::get_patch(matches);
        let name = patch.name.take().unwrap_or_default();
        Self { name, patch }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new pet...");

        let mut pet = Pet::new(self.name.trim(), "");
        self.patch.apply_to(&mut pet);
        pet.validate()?;

        let id = animo.pets().insert(&pet).await?;
        println!("Added {} with id {}", pet.name.bold(), id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPetEdit {
    pub id: i64,
    pub patch: PetPatch,
}

impl CmdPetEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit the profile of a pet")
            .arg(CommonArgs::id("pet"))
            .arg(PetArgs::name(false))
            .arg(PetArgs::breed(false))
            .args(PetArgs::profile())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
            patch: PetArgs::get_patch(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing pet...");

        if self.patch.is_empty() {
            println!("{}", "Nothing to update".italic());
            return Ok(());
        }

        let pets = animo.pets();
        let Some(mut pet) = pets.get(self.id).await? else {
            return Err(format!("Pet not found: {}", self.id).into());
        };
        self.patch.apply_to(&mut pet);
        pet.validate()?;
        pets.update(&pet).await?;

        println!("Updated {}", pet.name.bold());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdPetDelete {
    pub id: i64,
}

impl CmdPetDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a pet together with its activities")
            .arg(CommonArgs::id("pet"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting pet...");

        let pets = animo.pets();
        let Some(pet) = pets.get(self.id).await? else {
            return Err(format!("Pet not found: {}", self.id).into());
        };
        pets.delete(pet.id).await?;

        println!("Deleted {}", pet.name.bold());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdPetList {
    pub output_format: OutputFormat,
}

impl CmdPetList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your pets")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing pets...");

        let vm = animo.pet_view_model();
        vm.ready().await;
        let pets = vm.pets().borrow().clone();
        let selected = vm.selected_pet().borrow().as_ref().map(|p| p.id);

        if pets.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No pets found".italic());
            return Ok(());
        }

        let formatter = PetFormatter::new()
            .with_selected(selected)
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&pets));
        Ok(())
    }
}
