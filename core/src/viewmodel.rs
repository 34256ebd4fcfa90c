// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! View-state holders.
//!
//! Each holder re-exposes repository streams as [`watch`] receivers kept
//! current by a background collector task, which is aborted when the holder
//! is dropped. Mutations are fire-and-forget: they spawn a task and return
//! at once, failures are logged and never reach the caller.

mod activity;
mod pet;
mod settings;
mod user;

use std::future::Future;

use jiff::civil::DateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub use crate::viewmodel::activity::ActivityViewModel;
pub use crate::viewmodel::pet::PetViewModel;
pub use crate::viewmodel::settings::SettingsViewModel;
pub use crate::viewmodel::user::UserViewModel;

/// Background task that lives as long as its holder.
#[derive(Debug)]
struct Collector(JoinHandle<()>);

impl Collector {
    fn spawn(task: impl Future<Output = ()> + Send + 'static) -> Self {
        Self(tokio::spawn(task))
    }
}

impl Drop for Collector {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs a write in the background, logging its failure.
fn spawn_write(op: &'static str, write: impl Future<Output = crate::Result<()>> + Send + 'static) {
    tokio::spawn(async move {
        if let Err(e) = write.await {
            tracing::error!(op, err = %e, "background write failed");
        }
    });
}

/// Resolves once `ready` holds `true`.
async fn wait_ready(ready: &watch::Sender<bool>) {
    let mut rx = ready.subscribe();
    // The sender outlives this call, so waiting cannot fail
    let _ = rx.wait_for(|ready| *ready).await;
}

fn mark_ready(ready: &watch::Sender<bool>) {
    ready.send_if_modified(|r| !std::mem::replace(r, true));
}

/// The current local wall clock time.
pub(crate) fn local_now() -> DateTime {
    jiff::Zoned::now().datetime()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use tokio::sync::watch;
    use tokio::time::timeout;

    /// Waits until the watched value satisfies `f`, failing the test after a few seconds.
    pub async fn wait_until<T>(rx: &mut watch::Receiver<T>, f: impl FnMut(&T) -> bool) -> T
    where
        T: Clone,
    {
        let value = timeout(Duration::from_secs(5), rx.wait_for(f))
            .await
            .expect("timed out waiting for state")
            .expect("state sender dropped");
        (*value).clone()
    }
}
