// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

/// Prints the completion script of a shell, e.g. `animo generate-completion zsh > _animo`.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "The shell to generate for").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: *matches.get_one::<Shell>("shell").expect("shell is required"),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.write_to(&mut io::stdout());
        Ok(())
    }

    pub fn write_to(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self.shell {
            Shell::Bash => write_with(ClapShell::Bash, buf),
            Shell::Elvish => write_with(ClapShell::Elvish, buf),
            Shell::Fish => write_with(ClapShell::Fish, buf),
            Shell::PowerShell => write_with(ClapShell::PowerShell, buf),
            Shell::Zsh => write_with(ClapShell::Zsh, buf),
            Shell::Nushell => write_with(clap_complete_nushell::Nushell {}, buf),
        }
    }
}

fn write_with(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, buf);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
