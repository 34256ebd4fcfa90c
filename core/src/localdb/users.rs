// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::User;
use crate::localdb::live::{Changes, LiveStream, Table, live};

#[derive(Debug, Clone)]
pub struct Users {
    pool: SqlitePool,
    changes: Arc<Changes>,
}

impl Users {
    pub fn new(pool: SqlitePool, changes: Arc<Changes>) -> Self {
        Self { pool, changes }
    }

    /// Inserts the user, or replaces the row with the same id. Returns the row id.
    pub async fn insert(&self, user: &User) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO users (id, name, email, is_logged_in)
VALUES (?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    name         = excluded.name,
    email        = excluded.email,
    is_logged_in = excluded.is_logged_in
RETURNING id;
";

        let (id,): (i64,) = sqlx::query_as(SQL)
            .bind((user.id != 0).then_some(user.id))
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.is_logged_in)
            .fetch_one(&self.pool)
            .await?;

        self.changes.notify(Table::Users);
        Ok(id)
    }

    pub async fn update(&self, user: &User) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE users SET name = ?, email = ?, is_logged_in = ? WHERE id = ?;";

        sqlx::query(SQL)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.is_logged_in)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        self.changes.notify(Table::Users);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        const SQL: &str = "DELETE FROM users WHERE id = ?;";

        sqlx::query(SQL).bind(id).execute(&self.pool).await?;

        self.changes.notify(Table::Users);
        Ok(())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, email, is_logged_in
FROM users
WHERE email = ?
ORDER BY id ASC
LIMIT 1;
";

        sqlx::query_as(SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_logged_in(&self) -> Result<Option<User>, sqlx::Error> {
        logged_in(&self.pool).await
    }

    pub fn watch_logged_in(&self) -> LiveStream<Option<User>> {
        let pool = self.pool.clone();
        live(self.changes.subscribe(Table::Users), move || {
            let pool = pool.clone();
            async move { logged_in(&pool).await }
        })
    }

    pub async fn logout_all(&self) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE users SET is_logged_in = 0;";

        sqlx::query(SQL).execute(&self.pool).await?;

        self.changes.notify(Table::Users);
        Ok(())
    }

    pub async fn login(&self, id: i64) -> Result<(), sqlx::Error> {
        const SQL: &str = "UPDATE users SET is_logged_in = 1 WHERE id = ?;";

        sqlx::query(SQL).bind(id).execute(&self.pool).await?;

        self.changes.notify(Table::Users);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM users;";
        let (count,): (i64,) = sqlx::query_as(SQL).fetch_one(&self.pool).await?;
        Ok(count)
    }

    pub async fn count_logged_in(&self) -> Result<i64, sqlx::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM users WHERE is_logged_in = 1;";
        let (count,): (i64,) = sqlx::query_as(SQL).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

async fn logged_in(pool: &SqlitePool) -> Result<Option<User>, sqlx::Error> {
    const SQL: &str = "\
SELECT id, name, email, is_logged_in
FROM users
WHERE is_logged_in = 1
LIMIT 1;
";

    sqlx::query_as(SQL).fetch_optional(pool).await
}
