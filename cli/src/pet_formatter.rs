// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use animo_core::Pet;
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct PetFormatter {
    columns: Vec<PetColumn>,
    selected: Option<i64>,
    format: OutputFormat,
}

impl PetFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                PetColumn::Id,
                PetColumn::Name,
                PetColumn::Breed,
                PetColumn::Age,
                PetColumn::Weight,
                PetColumn::Sex,
            ],
            selected: None,
            format: OutputFormat::Table,
        }
    }

    /// Highlights the selected pet.
    pub fn with_selected(mut self, selected: Option<i64>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, pets: &'a [Pet]) -> Display<'a> {
        Display {
            pets,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    pets: &'a [Pet],
    formatter: &'a PetFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self
            .formatter
            .columns
            .iter()
            .map(|&column| Column {
                column,
                selected: self.formatter.selected,
            })
            .collect();

        match self.formatter.format {
            OutputFormat::Json => write!(f, "{}", Table::new(TableStyleJson::new(), &columns, self.pets)),
            OutputFormat::Table => write!(f, "{}", Table::new(TableStyleBasic::new(), &columns, self.pets)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetColumn {
    Id,
    Name,
    Breed,
    Age,
    Weight,
    Sex,
}

struct Column {
    column: PetColumn,
    selected: Option<i64>,
}

impl TableColumn<Pet> for Column {
    fn name(&self) -> Cow<'_, str> {
        match self.column {
            PetColumn::Id => "ID",
            PetColumn::Name => "Name",
            PetColumn::Breed => "Breed",
            PetColumn::Age => "Age",
            PetColumn::Weight => "Weight",
            PetColumn::Sex => "Sex",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Pet) -> Cow<'a, str> {
        match self.column {
            PetColumn::Id => data.id.to_string().into(),
            PetColumn::Name => data.name.as_str().into(),
            PetColumn::Breed => data.breed.as_str().into(),
            PetColumn::Age => format_age(data.age).into(),
            PetColumn::Weight => format_weight(data.weight).into(),
            PetColumn::Sex => data.sex.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.column {
            PetColumn::Id | PetColumn::Age | PetColumn::Weight => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &Pet) -> Option<Color> {
        match self.column {
            PetColumn::Name if self.selected == Some(data.id) => Some(Color::Green),
            _ => None,
        }
    }
}

pub fn format_age(age: i64) -> String {
    match age {
        1 => "1 year".to_string(),
        n => format!("{n} years"),
    }
}

pub fn format_weight(weight: f64) -> String {
    format!("{weight:.1} kg")
}
