// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

mod activities;
mod live;
mod pets;
mod settings;
mod users;


use std::path::Path;
use std::sync::Arc;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

pub use crate::localdb::activities::Activities;
pub use crate::localdb::live::LiveStream;
use crate::localdb::live::Changes;
pub use crate::localdb::pets::Pets;
pub use crate::localdb::settings::Settings;
pub use crate::localdb::users::Users;

static MIGRATOR: Migrator = sqlx::migrate!("src/localdb/migrations"); // relative path from the crate root

/// Handle to the local store. Cloning shares the pool and the change counters.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub users: Users,
    pub pets: Pets,
    pub activities: Activities,
    pub settings: Settings,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, crate::Error> {
        let pool = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal);
            SqlitePoolOptions::new().connect_with(options).await?
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // Every connection to `:memory:` is a fresh database, keep exactly one alive
            let options = SqliteConnectOptions::new().in_memory(true);
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        };

        migrate(&pool).await?;

        let changes = Arc::new(Changes::new());
        Ok(LocalDb {
            users: Users::new(pool.clone(), changes.clone()),
            pets: Pets::new(pool.clone(), changes.clone()),
            activities: Activities::new(pool.clone(), changes.clone()),
            settings: Settings::new(pool.clone(), changes),
            pool,
        })
    }

    pub async fn close(self) {
        tracing::debug!("closing database connection");
        self.pool.close().await;
    }
}

/// Brings the schema up to date.
///
/// A history this build cannot reconcile (a newer version, an edited
/// migration, a half-applied one) wipes the database and starts over.
async fn migrate(pool: &SqlitePool) -> Result<(), crate::Error> {
    match MIGRATOR.run(pool).await {
        Ok(()) => Ok(()),
        Err(
            e @ (MigrateError::VersionMissing(_)
            | MigrateError::VersionMismatch(_)
            | MigrateError::Dirty(_)),
        ) => {
            tracing::warn!(err = %e, "incompatible schema history, recreating the database");
            drop_all_tables(pool).await?;
            MIGRATOR.run(pool).await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    const SQL: &str = "\
SELECT name FROM sqlite_master
WHERE type = 'table' AND name NOT LIKE 'sqlite_%';
";

    let mut conn = pool.acquire().await?;
    sqlx::query("PRAGMA foreign_keys = OFF;")
        .execute(&mut *conn)
        .await?;

    let tables: Vec<(String,)> = sqlx::query_as(SQL).fetch_all(&mut *conn).await?;
    for (name,) in tables {
        tracing::debug!(table = %name, "dropping table");
        let sql = format!(r#"DROP TABLE IF EXISTS "{name}";"#);
        sqlx::query(&sql).execute(&mut *conn).await?;
    }

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&mut *conn)
        .await?;
    Ok(())
}
