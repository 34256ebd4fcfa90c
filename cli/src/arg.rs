// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use animo_core::{ActivityType, PetPatch};
use clap::{Arg, ArgMatches, arg, builder::BoolishValueParser, value_parser};
use clap_num::number_range;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn pet() -> Arg {
        arg!(--pet <ID> "Id of the pet, defaults to the selected pet")
            .value_parser(value_parser!(i64))
    }

    pub fn get_pet(matches: &ArgMatches) -> Option<i64> {
        matches.get_one("pet").copied()
    }

    pub fn id(kind: &str) -> Arg {
        arg!(id: <ID>)
            .help(format!("Id of the {kind}"))
            .value_parser(value_parser!(i64))
    }

    pub fn get_id(matches: &ArgMatches) -> i64 {
        *matches.get_one::<i64>("id").expect("id is required")
    }

    pub fn ids(kind: &str) -> Arg {
        Self::id(kind).num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<i64> {
        matches
            .get_many::<i64>("id")
            .expect("id is required")
            .copied()
            .collect()
    }

    /// A switch taking `on` / `off` (or any other boolish value).
    pub fn switch(name: &'static str, help: &'static str) -> Arg {
        Arg::new(name)
            .long(name)
            .value_name("on/off")
            .help(help)
            .value_parser(BoolishValueParser::new())
    }

    pub fn get_switch(matches: &ArgMatches, name: &str) -> Option<bool> {
        matches.get_one(name).copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PetArgs;

impl PetArgs {
    pub fn name(positional: bool) -> Arg {
        if positional {
            arg!(name: <NAME> "Name of the pet")
        } else {
            arg!(name: --name <NAME> "Name of the pet")
        }
    }

    pub fn breed(required: bool) -> Arg {
        arg!(--breed <BREED> "Breed of the pet").required(required)
    }

    /// The optional profile fields shared by `pet new` and `pet edit`.
    pub fn profile() -> Vec<Arg> {
        fn from_0_to_100(s: &str) -> Result<i64, String> {
            number_range(s, 0, 100)
        }

        vec![
            arg!(--age <AGE> "Age in years").value_parser(from_0_to_100),
            arg!(--weight <WEIGHT> "Weight in kilograms").value_parser(value_parser!(f64)),
            arg!(--sex <SEX> "Sex of the pet"),
            arg!(--color <COLOR> "Coat color"),
            arg!(--microchip <ID> "Microchip id"),
            arg!(--allergies <ALLERGIES> "Known allergies"),
            arg!(--medications <MEDICATIONS> "Current medications"),
            arg!(--"vet-name" <NAME> "Name of the vet"),
            arg!(--"vet-phone" <PHONE> "Phone number of the vet"),
            arg!(--notes <NOTES> "Free-form notes"),
            arg!(--image <URI> "Image of the pet"),
        ]
    }

    pub fn get_patch(matches: &ArgMatches) -> PetPatch {
        let text = |id: &str| matches.get_one::<String>(id).cloned();
        PetPatch {
            name: text("name"),
            breed: text("breed"),
            age: matches.get_one("age").copied(),
            weight: matches.get_one("weight").copied(),
            sex: text("sex"),
            color: text("color"),
            microchip_id: text("microchip"),
            allergies: text("allergies"),
            medications: text("medications"),
            vet_name: text("vet-name"),
            vet_phone: text("vet-phone"),
            notes: text("notes"),
            image_uri: text("image"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActivityArgs;

impl ActivityArgs {
    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the activity")
    }

    pub fn get_title(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("title")
            .expect("title is required")
            .clone()
    }

    pub fn kind() -> Arg {
        arg!(kind: -t --"type" <TYPE> "Type of the activity")
            .value_parser(value_parser!(ActivityType))
            .required(true)
    }

    pub fn get_kind(matches: &ArgMatches) -> ActivityType {
        *matches.get_one("kind").expect("type is required")
    }

    pub fn at() -> Arg {
        arg!(--at <DATETIME> "Date and time of the activity (datetime, time, 'now' or 'tomorrow')")
            .required(true)
    }

    pub fn get_at(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("at")
            .expect("date and time is required")
            .clone()
    }
}
