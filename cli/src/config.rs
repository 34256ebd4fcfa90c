// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use animo_core::{APP_NAME, Config as CoreConfig, get_config_dir};

const ANIMO_CONFIG_ENV: &str = "ANIMO_CONFIG";
const ANIMO_DEV_ENV: &str = "ANIMO_DEV";

const ANIMO_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const ANIMO_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from `--config`, `$ANIMO_CONFIG` or the default
/// location, in that order. A missing default file yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(ANIMO_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({ANIMO_DEV_ENV} is set): config must be explicitly specified via --config or {ANIMO_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Configuration of the command-line interface, the `[cli]` table.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether reminders may be shown in the terminal.
    pub notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: true,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    core: CoreConfig,
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(ANIMO_DEV_ENV) {
        let lower = val.to_lowercase();
        if ANIMO_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if ANIMO_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: {}. Treating as unset.",
                ANIMO_DEV_ENV,
                val,
                format!(
                    "true: {}, false: {}",
                    ANIMO_DEV_VALID_TRUE.join(", "),
                    ANIMO_DEV_VALID_FALSE.join(", ")
                )
            );
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Writes a config file pointing the state directory at `state_dir`.
    fn write_config(path: &Path, state_dir: &Path) {
        let toml_content = format!(
            r#"
[core]
state_dir = "{}"
"#,
            state_dir.to_str().unwrap().replace('\\', "/")
        );
        fs::write(path, toml_content).unwrap();
    }

    #[test]
    fn parses_cli_table() {
        let raw: ConfigRaw = r#"
[core]
reminder_lead = "30m"

[cli]
notifications = false
"#
        .parse()
        .unwrap();

        assert!(!raw.cli.notifications);
        assert_eq!(raw.core.reminder_lead.0, jiff::SignedDuration::from_mins(30));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let raw: ConfigRaw = "".parse().unwrap();
        assert!(raw.cli.notifications);
        assert_eq!(raw.core.state_dir, None);
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let state_dir = temp_dir.path().join("state");
        write_config(&config_path, &state_dir);

        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, &temp_dir.path().join("env_state"));

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_DEV_ENV);
                std::env::set_var(ANIMO_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let (config, _) = parse_config(Some(config_path)).await.unwrap();

            assert_eq!(config.state_dir, Some(state_dir));

            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_config_path = temp_dir.path().join("env_config.toml");
        let state_dir = temp_dir.path().join("state");
        write_config(&env_config_path, &state_dir);

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_DEV_ENV);
                std::env::set_var(ANIMO_CONFIG_ENV, env_config_path.to_str().unwrap());
            }

            let (config, _) = parse_config(None).await.unwrap();

            assert_eq!(config.state_dir, Some(state_dir));

            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let result = parse_config(Some(missing)).await;

        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("Failed to read config file"));
    }

    // TODO: Re-enable on Windows once get_config_dir() supports environment variables
    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join("animo");
        fs::create_dir_all(&default_config_dir).unwrap();
        let state_dir = temp_dir.path().join("state");
        write_config(&default_config_dir.join("config.toml"), &state_dir);

        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
                std::env::remove_var(ANIMO_DEV_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let (config, _) = parse_config(None).await.unwrap();

            assert_eq!(config.state_dir, Some(state_dir));

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    // TODO: Re-enable on Windows once get_config_dir() supports environment variables
    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_defaults_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        let xdg_config_home = empty_dir.to_str().unwrap().to_string();
        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
                std::env::remove_var(ANIMO_DEV_ENV);
                std::env::set_var("XDG_CONFIG_HOME", xdg_config_home);
            }

            let (config, cli) = parse_config(None).await.unwrap();

            assert_eq!(config.state_dir, None);
            assert!(cli.notifications);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn animo_dev_disables_default_discovery() {
        for value in ["1", "true", "yes", "TRUE"] {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
                std::env::set_var(ANIMO_DEV_ENV, value);
            }

            let result = parse_config(None).await;

            let error_msg = result.unwrap_err().to_string();
            assert!(error_msg.contains("Development environment detected"), "{value}");
            assert!(error_msg.contains(ANIMO_DEV_ENV));

            unsafe {
                std::env::remove_var(ANIMO_DEV_ENV);
            }
        }
    }

    // TODO: Re-enable on Windows once get_config_dir() supports environment variables
    #[cfg(unix)]
    #[tokio::test]
    async fn animo_dev_false_allows_default_discovery() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join("animo");
        fs::create_dir_all(&default_config_dir).unwrap();
        let state_dir = temp_dir.path().join("state");
        write_config(&default_config_dir.join("config.toml"), &state_dir);

        let xdg_config_home = temp_dir.path().to_str().unwrap().to_string();
        for value in ["0", "false", "no", "False", "invalid"] {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(ANIMO_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", &xdg_config_home);
                std::env::set_var(ANIMO_DEV_ENV, value);
            }

            let (config, _) = parse_config(None).await.unwrap();
            assert_eq!(config.state_dir.as_ref(), Some(&state_dir), "{value}");

            unsafe {
                std::env::remove_var(ANIMO_DEV_ENV);
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn animo_dev_cli_flag_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let state_dir = temp_dir.path().join("state");
        write_config(&config_path, &state_dir);

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(ANIMO_DEV_ENV, "1");
            }

            let (config, _) = parse_config(Some(config_path)).await.unwrap();
            assert_eq!(config.state_dir, Some(state_dir));

            unsafe {
                std::env::remove_var(ANIMO_DEV_ENV);
            }
        }
    }
}
