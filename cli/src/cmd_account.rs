// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use animo_core::Animo;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

fn get_string(matches: &ArgMatches, id: &str) -> String {
    matches
        .get_one::<String>(id)
        .expect("required argument")
        .clone()
}

#[derive(Debug, Clone)]
pub struct CmdRegister {
    pub name: String,
    pub email: String,
}

impl CmdRegister {
    pub const NAME: &str = "register";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Create a local account and log in")
            .arg(arg!(name: <NAME> "Your name"))
            .arg(arg!(email: <EMAIL> "Your email address"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: get_string(matches, "name"),
            email: get_string(matches, "email"),
        }
    }

    /// Registration failures are reported here and do not fail the command.
    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "registering...");

        match animo.register(&self.name, &self.email).await {
            Ok(_) => println!("Welcome, {}!", self.name.trim().bold()),
            Err(e) => println!("{} {}", "Registration failed:".red(), e),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub email: String,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Log in with the email of a registered account")
            .arg(arg!(email: <EMAIL> "Your email address"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            email: get_string(matches, "email"),
        }
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging in...");

        match animo.login(&self.email).await {
            Ok(true) => {
                let name = animo.users().logged_in_user().await?.map(|u| u.name);
                println!("Welcome back, {}!", name.unwrap_or_default().bold());
            }
            Ok(false) => println!(
                "{} no account found for {}, register first",
                "Login failed:".red(),
                self.email.trim()
            ),
            Err(e) => println!("{} {}", "Login failed:".red(), e),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdLogout;

impl CmdLogout {
    pub const NAME: &str = "logout";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Log out")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdLogout
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging out...");
        animo.users().logout_user().await?;
        println!("Logged out");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdWhoami;

impl CmdWhoami {
    pub const NAME: &str = "whoami";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the logged in account")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdWhoami
    }

    pub async fn run(self, animo: &Animo) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing account...");

        let vm = animo.user_view_model();
        vm.ready().await;
        match vm.user().borrow().as_ref() {
            Some(user) => println!("{} <{}>", user.name.bold(), user.email),
            None => println!("{}", "Not logged in".italic()),
        }
        Ok(())
    }
}
