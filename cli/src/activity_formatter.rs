// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use animo_core::{Activity, ActivityType};
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_datetime, format_time};

#[derive(Debug)]
pub struct ActivityFormatter {
    columns: Vec<ActivityColumn>,
    format: OutputFormat,
}

impl ActivityFormatter {
    pub fn new(columns: Vec<ActivityColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    /// Columns of the activity list.
    pub fn list() -> Self {
        Self::new(vec![
            ActivityColumn::Id,
            ActivityColumn::DateTime,
            ActivityColumn::Type,
            ActivityColumn::Title,
            ActivityColumn::PetId,
        ])
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, activities: &'a [&'a Activity]) -> Display<'a> {
        Display {
            activities,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    activities: &'a [&'a Activity],
    formatter: &'a ActivityFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.activities)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.activities)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityColumn {
    Id,
    DateTime,
    /// Clock time only, for lists of a single day.
    Time,
    Type,
    Title,
    PetId,
}

impl<'r> TableColumn<&'r Activity> for ActivityColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ActivityColumn::Id => "ID",
            ActivityColumn::DateTime => "Date Time",
            ActivityColumn::Time => "Time",
            ActivityColumn::Type => "Type",
            ActivityColumn::Title => "Title",
            ActivityColumn::PetId => "Pet",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'r Activity) -> Cow<'a, str> {
        match self {
            ActivityColumn::Id => data.id.to_string().into(),
            ActivityColumn::DateTime => format_datetime(data.date_time).into(),
            ActivityColumn::Time => format_time(data.date_time).into(),
            ActivityColumn::Type => data.kind.label().into(),
            ActivityColumn::Title => data.title.as_str().into(),
            ActivityColumn::PetId => data.pet_id.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ActivityColumn::Id | ActivityColumn::Time | ActivityColumn::PetId => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &&'r Activity) -> Option<Color> {
        match self {
            ActivityColumn::Type => Some(kind_color(data.kind)),
            _ => None,
        }
    }
}

fn kind_color(kind: ActivityType) -> Color {
    match kind {
        ActivityType::Appointment | ActivityType::Vaccination => Color::Red,
        ActivityType::Medication => Color::Yellow,
        ActivityType::Walk | ActivityType::Meal => Color::Green,
    }
}
