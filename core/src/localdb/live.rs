// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Change tracking that turns one-shot queries into live streams.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;

/// A live query result: re-emitted after every write to the watched table.
pub type LiveStream<T> = BoxStream<'static, Result<T, sqlx::Error>>;

/// Tables whose writes are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Pets,
    Activities,
    NotificationSettings,
}

/// Per-table change counters, bumped by every write.
#[derive(Debug)]
pub struct Changes {
    users: watch::Sender<u64>,
    pets: watch::Sender<u64>,
    activities: watch::Sender<u64>,
    notification_settings: watch::Sender<u64>,
}

impl Default for Changes {
    fn default() -> Self {
        Self::new()
    }
}

impl Changes {
    pub fn new() -> Self {
        Self {
            users: watch::Sender::new(0),
            pets: watch::Sender::new(0),
            activities: watch::Sender::new(0),
            notification_settings: watch::Sender::new(0),
        }
    }

    pub fn notify(&self, table: Table) {
        tracing::trace!(?table, "table changed");
        self.sender(table).send_modify(|v| *v = v.wrapping_add(1));
    }

    pub fn subscribe(&self, table: Table) -> watch::Receiver<u64> {
        self.sender(table).subscribe()
    }

    fn sender(&self, table: Table) -> &watch::Sender<u64> {
        match table {
            Table::Users => &self.users,
            Table::Pets => &self.pets,
            Table::Activities => &self.activities,
            Table::NotificationSettings => &self.notification_settings,
        }
    }
}

/// Runs `query` once right away and again after each change seen on `rx`.
///
/// Changes that land while a query is running collapse into a single re-run.
/// The stream ends once every sender of `rx` is gone, that is when the
/// database handle and all its accessors have been dropped.
pub fn live<T, F, Fut>(mut rx: watch::Receiver<u64>, query: F) -> LiveStream<T>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, sqlx::Error>> + Send + 'static,
{
    rx.mark_changed();
    stream::unfold((rx, query), |(mut rx, mut query)| async move {
        rx.changed().await.ok()?;
        let result = query().await;
        Some((result, (rx, query)))
    })
    .boxed()
}
