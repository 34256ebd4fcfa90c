// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use jiff::SignedDuration;
use jiff::civil::Time;
use serde::de;

use crate::notification::{DEFAULT_DAILY_SUMMARY_AT, DEFAULT_REMINDER_LEAD};
use crate::{Error, Result};

/// The name of the Animo application.
pub const APP_NAME: &str = "animo";

/// Configuration for the Animo application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory holding the database and the preferences file.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// How long before an activity its reminder fires.
    #[serde(default)]
    pub reminder_lead: ConfigDuration,

    /// Local time of the daily summary.
    #[serde(default)]
    pub daily_summary_at: ConfigTime,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<()> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    Error::Config(format!("Failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        if self.reminder_lead.0.is_negative() {
            return Err(Error::Config(format!(
                "Reminder lead must not be negative: {}",
                self.reminder_lead.0
            )));
        }

        Ok(())
    }
}

/// A duration read from strings like `"HH:MM"`, `"1d"`, `"2h"`, `"45m"` or `"1800s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(pub SignedDuration);

impl Default for ConfigDuration {
    fn default() -> Self {
        Self(DEFAULT_REMINDER_LEAD)
    }
}

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(ConfigDuration)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// A local wall clock time read from `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTime(pub Time);

impl Default for ConfigTime {
    fn default() -> Self {
        Self(DEFAULT_DAILY_SUMMARY_AT)
    }
}

impl<'de> serde::Deserialize<'de> for ConfigTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = ConfigTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a time string like "20:00""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Time::strptime("%H:%M", value.trim())
                    .map(ConfigTime)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user configuration directory, `$XDG_CONFIG_HOME` on unix.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<SignedDuration, Box<dyn std::error::Error>> {
    let scaled = |value: &str, unit: i64| -> Result<i64, Box<dyn std::error::Error>> {
        let value: i64 = value.trim().parse()?;
        value
            .checked_mul(unit)
            .ok_or_else(|| format!("Invalid duration, out of range: {s}").into())
    };

    // Try to parse "HH:MM" format
    let secs = if let Some((h, m)) = s.split_once(':') {
        scaled(h, 3600)?
            .checked_add(scaled(m, 60)?)
            .ok_or_else(|| format!("Invalid duration, out of range: {s}"))?
    }
    // Match suffix-based formats
    else if let Some(rest) = s.strip_suffix("d") {
        scaled(rest, 86400)?
    } else if let Some(rest) = s.strip_suffix("h") {
        scaled(rest, 3600)?
    } else if let Some(rest) = s.strip_suffix("m") {
        scaled(rest, 60)?
    } else if let Some(rest) = s.strip_suffix("s") {
        scaled(rest, 1)?
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };
    Ok(SignedDuration::from_secs(secs))
}
