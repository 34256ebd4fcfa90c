// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use animo_core::{APP_NAME, Animo};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_authors, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_account::{CmdLogin, CmdLogout, CmdRegister, CmdWhoami};
use crate::cmd_activity::{CmdActivityDelete, CmdActivityList, CmdActivityNew, CmdLog};
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_pet::{CmdPetDelete, CmdPetEdit, CmdPetList, CmdPetNew};
use crate::cmd_profile::CmdProfile;
use crate::cmd_remind::CmdRemind;
use crate::cmd_schedule::CmdSchedule;
use crate::cmd_settings::CmdSettings;
use crate::config::{Config, parse_config};

/// Run the Animo command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep track of your pets' walks, meals, medications and vet visits.")
            .author(crate_authors!())
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/animo/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/animo/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdSchedule::command())
            .subcommand(CmdProfile::command())
            .subcommand(CmdSettings::command())
            .subcommand(CmdLog::command())
            .subcommand(
                Command::new("activity")
                    .alias("a")
                    .about("Manage the activities of your pets")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdActivityNew::command())
                    .subcommand(CmdActivityList::command())
                    .subcommand(CmdActivityDelete::command()),
            )
            .subcommand(
                Command::new("pet")
                    .alias("p")
                    .about("Manage your pets")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPetNew::command())
                    .subcommand(CmdPetEdit::command())
                    .subcommand(CmdPetDelete::command())
                    .subcommand(CmdPetList::command()),
            )
            .subcommand(CmdRegister::command())
            .subcommand(CmdLogin::command())
            .subcommand(CmdLogout::command())
            .subcommand(CmdWhoami::command())
            .subcommand(CmdRemind::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdSchedule::NAME, matches)) => Schedule(CmdSchedule::from(matches)),
            Some((CmdProfile::NAME, matches)) => Profile(CmdProfile::from(matches)),
            Some((CmdSettings::NAME, matches)) => Settings(CmdSettings::from(matches)),
            Some((CmdLog::NAME, matches)) => Log(CmdLog::from(matches)),
            Some(("activity", matches)) => match matches.subcommand() {
                Some((CmdActivityNew::NAME, matches)) => ActivityNew(CmdActivityNew::from(matches)),
                Some((CmdActivityList::NAME, matches)) => {
                    ActivityList(CmdActivityList::from(matches))
                }
                Some((CmdActivityDelete::NAME, matches)) => {
                    ActivityDelete(CmdActivityDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("pet", matches)) => match matches.subcommand() {
                Some((CmdPetNew::NAME, matches)) => PetNew(CmdPetNew::from(matches)),
                Some((CmdPetEdit::NAME, matches)) => PetEdit(CmdPetEdit::from(matches)),
                Some((CmdPetDelete::NAME, matches)) => PetDelete(CmdPetDelete::from(matches)),
                Some((CmdPetList::NAME, matches)) => PetList(CmdPetList::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdRegister::NAME, matches)) => Register(CmdRegister::from(matches)),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdLogout::NAME, matches)) => Logout(CmdLogout::from(matches)),
            Some((CmdWhoami::NAME, matches)) => Whoami(CmdWhoami::from(matches)),
            Some((CmdRemind::NAME, matches)) => Remind(CmdRemind::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Show the schedule grouped by date
    Schedule(CmdSchedule),

    /// Show the profile of a pet
    Profile(CmdProfile),

    /// Show or change settings
    Settings(CmdSettings),

    /// Log a walk, meal or medication now
    Log(CmdLog),

    /// Add a new activity
    ActivityNew(CmdActivityNew),

    /// List activities
    ActivityList(CmdActivityList),

    /// Delete activities
    ActivityDelete(CmdActivityDelete),

    /// Add a new pet
    PetNew(CmdPetNew),

    /// Edit a pet
    PetEdit(CmdPetEdit),

    /// Delete a pet
    PetDelete(CmdPetDelete),

    /// List pets
    PetList(CmdPetList),

    /// Register a local account
    Register(CmdRegister),

    /// Log in
    Login(CmdLogin),

    /// Log out
    Logout(CmdLogout),

    /// Show the logged in account
    Whoami(CmdWhoami),

    /// Run the reminder service
    Remind(CmdRemind),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a)      => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Schedule(a)       => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Profile(a)        => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Settings(a)       => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Log(a)            => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            ActivityNew(a)    => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            ActivityList(a)   => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            ActivityDelete(a) => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            PetNew(a)         => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            PetEdit(a)        => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            PetDelete(a)      => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            PetList(a)        => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Register(a)       => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Login(a)          => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Logout(a)         => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Whoami(a)         => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Remind(a)         => Self::run_with(config, |x, c| a.run(x, c).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Animo, &'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        let mut animo = Animo::new(core_config).await?;

        f(&mut animo, &config).await?;

        animo.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cmd_generate_completion::Shell, util::OutputFormat};
    use animo_core::{ActivityType, QuickLog};

    #[test]
    fn test_command_metadata() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "animo");
        assert_eq!(cmd.get_author(), Some("The Animo Developers"));
        assert_eq!(cmd.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_default_dashboard() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        match cli.command {
            Commands::Dashboard(cmd) => assert_eq!(cmd.pet, None),
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_parse_dashboard_with_pet() {
        let cli = Cli::try_parse_from(vec!["test", "dashboard", "--pet", "2"]).unwrap();
        match cli.command {
            Commands::Dashboard(cmd) => assert_eq!(cmd.pet, Some(2)),
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_parse_screens() {
        let cli = Cli::try_parse_from(vec!["test", "schedule"]).unwrap();
        assert!(matches!(cli.command, Commands::Schedule(_)));

        let cli = Cli::try_parse_from(vec!["test", "profile"]).unwrap();
        assert!(matches!(cli.command, Commands::Profile(_)));

        let cli = Cli::try_parse_from(vec!["test", "settings", "--appointments", "off"]).unwrap();
        match cli.command {
            Commands::Settings(cmd) => assert_eq!(cmd.appointments, Some(false)),
            _ => panic!("Expected Settings command"),
        }
    }

    #[test]
    fn test_parse_activity_new() {
        let args = vec![
            "test", "activity", "new", "Rabies shot", "--type", "vaccination", "--at", "tomorrow",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::ActivityNew(cmd) => {
                assert_eq!(cmd.title, "Rabies shot");
                assert_eq!(cmd.kind, ActivityType::Vaccination);
                assert_eq!(cmd.at, "tomorrow");
            }
            _ => panic!("Expected ActivityNew command"),
        }
    }

    #[test]
    fn test_parse_activity_list() {
        let args = vec!["test", "a", "ls", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::ActivityList(cmd) => {
                assert_eq!(cmd.output_format, OutputFormat::Json);
                assert_eq!(cmd.pet, None);
            }
            _ => panic!("Expected ActivityList command"),
        }
    }

    #[test]
    fn test_parse_activity_delete() {
        let cli = Cli::try_parse_from(vec!["test", "activity", "delete", "3", "4"]).unwrap();
        match cli.command {
            Commands::ActivityDelete(cmd) => assert_eq!(cmd.ids, vec![3, 4]),
            _ => panic!("Expected ActivityDelete command"),
        }
    }

    #[test]
    fn test_parse_log() {
        let cli = Cli::try_parse_from(vec!["test", "log", "meal", "--pet", "1"]).unwrap();
        match cli.command {
            Commands::Log(cmd) => {
                assert_eq!(cmd.what, QuickLog::Meal);
                assert_eq!(cmd.pet, Some(1));
            }
            _ => panic!("Expected Log command"),
        }
    }

    #[test]
    fn test_parse_pet_commands() {
        let cli = Cli::try_parse_from(vec!["test", "pet", "new", "Rex", "--breed", "Lab"]).unwrap();
        assert!(matches!(cli.command, Commands::PetNew(_)));

        let cli = Cli::try_parse_from(vec!["test", "pet", "edit", "1", "--age", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::PetEdit(_)));

        let cli = Cli::try_parse_from(vec!["test", "p", "delete", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::PetDelete(_)));

        let cli = Cli::try_parse_from(vec!["test", "pet", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::PetList(_)));
    }

    #[test]
    fn test_parse_pet_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["test", "pet"]).is_err());
    }

    #[test]
    fn test_parse_account_commands() {
        let cli = Cli::try_parse_from(vec!["test", "register", "Jane", "jane@example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Register(_)));

        let cli = Cli::try_parse_from(vec!["test", "login", "jane@example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Login(_)));

        let cli = Cli::try_parse_from(vec!["test", "logout"]).unwrap();
        assert!(matches!(cli.command, Commands::Logout(_)));

        let cli = Cli::try_parse_from(vec!["test", "whoami"]).unwrap();
        assert!(matches!(cli.command, Commands::Whoami(_)));
    }

    #[test]
    fn test_parse_remind() {
        let cli = Cli::try_parse_from(vec!["test", "remind"]).unwrap();
        assert!(matches!(cli.command, Commands::Remind(_)));
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
