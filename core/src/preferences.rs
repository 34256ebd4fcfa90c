// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::Result;

/// File name of the preference store inside the state directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Appearance preferences, kept outside the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub dark_mode: bool,
    pub dynamic_color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_mode: false,
            dynamic_color: true,
        }
    }
}

/// Observable key/value store for [`Theme`], persisted as JSON.
#[derive(Debug, Clone)]
pub struct ThemePreferences {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: Option<PathBuf>,
    tx: watch::Sender<Theme>,
    write: Mutex<()>,
}

impl ThemePreferences {
    /// Loads the preferences from `path`, or keeps them in memory when `None`.
    ///
    /// A missing file yields the defaults.
    pub async fn open(path: Option<&Path>) -> Result<Self> {
        let theme = match path {
            Some(path) => match tokio::fs::read(path).await {
                Ok(bytes) => serde_json::from_slice(&bytes)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no preferences file, using defaults");
                    Theme::default()
                }
                Err(e) => return Err(e.into()),
            },
            None => Theme::default(),
        };

        Ok(Self {
            inner: Arc::new(Inner {
                path: path.map(Path::to_path_buf),
                tx: watch::Sender::new(theme),
                write: Mutex::new(()),
            }),
        })
    }

    /// The current preferences.
    pub fn get(&self) -> Theme {
        *self.inner.tx.borrow()
    }

    /// Subscribes to preference changes.
    pub fn watch(&self) -> watch::Receiver<Theme> {
        self.inner.tx.subscribe()
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.update(|t| t.dark_mode = enabled).await
    }

    pub async fn set_dynamic_color(&self, enabled: bool) -> Result<()> {
        self.update(|t| t.dynamic_color = enabled).await
    }

    async fn update(&self, f: impl FnOnce(&mut Theme)) -> Result<()> {
        let _guard = self.inner.write.lock().await;

        let mut theme = self.get();
        f(&mut theme);

        if let Some(path) = &self.inner.path {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let json = serde_json::to_vec_pretty(&theme)?;
            tokio::fs::write(path, json).await?;
        }

        self.inner.tx.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ThemePreferences::open(Some(&dir.path().join(PREFERENCES_FILE)))
            .await
            .unwrap();

        assert_eq!(
            prefs.get(),
            Theme {
                dark_mode: false,
                dynamic_color: true
            }
        );
    }

    #[tokio::test]
    async fn persists_across_reopen() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let prefs = ThemePreferences::open(Some(&path)).await.unwrap();

        // Act
        prefs.set_dark_mode(true).await.unwrap();
        prefs.set_dynamic_color(false).await.unwrap();

        // Assert
        let reopened = ThemePreferences::open(Some(&path)).await.unwrap();
        assert_eq!(
            reopened.get(),
            Theme {
                dark_mode: true,
                dynamic_color: false
            }
        );
    }

    #[tokio::test]
    async fn missing_keys_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        tokio::fs::write(&path, r#"{"dark_mode": true}"#).await.unwrap();

        let prefs = ThemePreferences::open(Some(&path)).await.unwrap();
        assert!(prefs.get().dark_mode);
        assert!(prefs.get().dynamic_color);
    }

    #[tokio::test]
    async fn rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = ThemePreferences::open(Some(&path)).await.unwrap_err();
        assert!(matches!(err, crate::Error::Preferences(_)));
    }

    #[tokio::test]
    async fn watchers_see_changes() {
        let prefs = ThemePreferences::open(None).await.unwrap();
        let mut rx = prefs.watch();

        prefs.set_dark_mode(true).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().dark_mode);

        prefs.set_dark_mode(true).await.unwrap();
        assert!(!rx.has_changed().unwrap(), "unchanged value is not announced");
    }
}
