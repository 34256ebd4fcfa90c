// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::NotificationSettings;
use crate::localdb::live::{Changes, LiveStream, Table, live};

#[derive(Debug, Clone)]
pub struct Settings {
    pool: SqlitePool,
    changes: Arc<Changes>,
}

impl Settings {
    pub fn new(pool: SqlitePool, changes: Arc<Changes>) -> Self {
        Self { pool, changes }
    }

    pub async fn get(&self) -> Result<Option<NotificationSettings>, sqlx::Error> {
        get(&self.pool).await
    }

    pub fn watch(&self) -> LiveStream<Option<NotificationSettings>> {
        let pool = self.pool.clone();
        live(self.changes.subscribe(Table::NotificationSettings), move || {
            let pool = pool.clone();
            async move { get(&pool).await }
        })
    }

    /// Writes the singleton row, replacing whatever is there.
    pub async fn insert(&self, settings: &NotificationSettings) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT OR REPLACE INTO notification_settings (id, appointments, medications, summary)
VALUES (?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(NotificationSettings::ID)
            .bind(settings.appointments)
            .bind(settings.medications)
            .bind(settings.summary)
            .execute(&self.pool)
            .await?;

        self.changes.notify(Table::NotificationSettings);
        Ok(())
    }

    pub async fn update(&self, settings: &NotificationSettings) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
UPDATE notification_settings
SET appointments = ?, medications = ?, summary = ?
WHERE id = ?;
";

        sqlx::query(SQL)
            .bind(settings.appointments)
            .bind(settings.medications)
            .bind(settings.summary)
            .bind(NotificationSettings::ID)
            .execute(&self.pool)
            .await?;

        self.changes.notify(Table::NotificationSettings);
        Ok(())
    }
}

async fn get(pool: &SqlitePool) -> Result<Option<NotificationSettings>, sqlx::Error> {
    const SQL: &str = "\
SELECT appointments, medications, summary
FROM notification_settings
WHERE id = ?;
";

    let row: Option<(bool, bool, bool)> = sqlx::query_as(SQL)
        .bind(NotificationSettings::ID)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(appointments, medications, summary)| NotificationSettings {
        appointments,
        medications,
        summary,
    }))
}
