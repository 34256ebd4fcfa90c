// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

mod activity_formatter;
mod arg;
mod cli;
mod cmd_account;
mod cmd_activity;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_pet;
mod cmd_profile;
mod cmd_remind;
mod cmd_schedule;
mod cmd_settings;
mod config;
mod pet_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_remind::TerminalNotifier;
pub use crate::config::Config;

/// An Animo instance keeping its state in `dir`.
#[cfg(test)]
async fn test_animo(dir: &std::path::Path) -> animo_core::Animo {
    let config = animo_core::Config {
        state_dir: Some(dir.join("state")),
        ..Default::default()
    };
    animo_core::Animo::new(config).await.unwrap()
}
