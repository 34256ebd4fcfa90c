// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use crate::activity::{format_stable, parse_stable};
use crate::localdb::live::{Changes, LiveStream, Table, live};
use crate::Activity;

#[derive(Debug, Clone)]
pub struct Activities {
    pool: SqlitePool,
    changes: Arc<Changes>,
}

impl Activities {
    pub fn new(pool: SqlitePool, changes: Arc<Changes>) -> Self {
        Self { pool, changes }
    }

    /// Inserts the activity, or replaces the row with the same id. Returns the row id.
    pub async fn insert(&self, activity: &Activity) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO activities (id, type, title, date_time, pet_id)
VALUES (?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    type      = excluded.type,
    title     = excluded.title,
    date_time = excluded.date_time,
    pet_id    = excluded.pet_id
RETURNING id;
";

        let (id,): (i64,) = sqlx::query_as(SQL)
            .bind((activity.id != 0).then_some(activity.id))
            .bind(activity.kind.as_str())
            .bind(&activity.title)
            .bind(format_stable(&activity.date_time))
            .bind(activity.pet_id)
            .fetch_one(&self.pool)
            .await?;

        self.changes.notify(Table::Activities);
        Ok(id)
    }

    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        const SQL: &str = "DELETE FROM activities WHERE id = ?;";

        sqlx::query(SQL).bind(id).execute(&self.pool).await?;

        self.changes.notify(Table::Activities);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Activity>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, type, title, date_time, pet_id
FROM activities
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All activities in chronological order.
    pub async fn list_all(&self) -> Result<Vec<Activity>, sqlx::Error> {
        list(&self.pool, None).await
    }

    /// Activities of one pet in chronological order.
    pub async fn list_by_pet(&self, pet_id: i64) -> Result<Vec<Activity>, sqlx::Error> {
        list(&self.pool, Some(pet_id)).await
    }

    pub fn watch_all(&self) -> LiveStream<Vec<Activity>> {
        self.watch(None)
    }

    pub fn watch_by_pet(&self, pet_id: i64) -> LiveStream<Vec<Activity>> {
        self.watch(Some(pet_id))
    }

    fn watch(&self, pet_id: Option<i64>) -> LiveStream<Vec<Activity>> {
        let pool = self.pool.clone();
        live(self.changes.subscribe(Table::Activities), move || {
            let pool = pool.clone();
            async move { list(&pool, pet_id).await }
        })
    }
}

async fn list(pool: &SqlitePool, pet_id: Option<i64>) -> Result<Vec<Activity>, sqlx::Error> {
    const SQL_ALL: &str = "\
SELECT id, type, title, date_time, pet_id
FROM activities
ORDER BY date_time ASC, id ASC;
";
    const SQL_BY_PET: &str = "\
SELECT id, type, title, date_time, pet_id
FROM activities
WHERE pet_id = ?
ORDER BY date_time ASC, id ASC;
";

    match pet_id {
        Some(pet_id) => sqlx::query_as(SQL_BY_PET).bind(pet_id).fetch_all(pool).await,
        None => sqlx::query_as(SQL_ALL).fetch_all(pool).await,
    }
}

impl<'r> FromRow<'r, SqliteRow> for Activity {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("type")?;
        let date_time: String = row.try_get("date_time")?;
        Ok(Activity {
            id: row.try_get("id")?,
            kind: kind.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "type".to_string(),
                source: Box::new(e),
            })?,
            title: row.try_get("title")?,
            date_time: parse_stable(&date_time).map_err(|e| sqlx::Error::ColumnDecode {
                index: "date_time".to_string(),
                source: Box::new(e),
            })?,
            pet_id: row.try_get("pet_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use jiff::civil::date;

    use super::*;
    use crate::localdb::LocalDb;
    use crate::{ActivityType, Pet};

    async fn setup_test_db() -> (LocalDb, i64) {
        let db = LocalDb::open(None).await.unwrap();
        let pet_id = db.pets.insert(&Pet::new("Rex", "Labrador")).await.unwrap();
        (db, pet_id)
    }

    #[tokio::test]
    async fn insert_and_get() {
        // Arrange
        let (db, pet_id) = setup_test_db().await;
        let mut activity = Activity::new(
            ActivityType::Appointment,
            "Annual checkup",
            date(2025, 6, 1).at(14, 30, 0, 0),
            pet_id,
        );

        // Act
        let id = db.activities.insert(&activity).await.unwrap();

        // Assert
        activity.id = id;
        assert_eq!(db.activities.get(id).await.unwrap(), Some(activity));
    }

    #[tokio::test]
    async fn lists_chronologically() {
        let (db, pet_id) = setup_test_db().await;
        for (title, hour) in [("Dinner", 18), ("Morning Walk", 8), ("Lunch", 12)] {
            let dt = date(2025, 6, 1).at(hour, 0, 0, 0);
            let activity = Activity::new(ActivityType::Meal, title, dt, pet_id);
            db.activities.insert(&activity).await.unwrap();
        }

        let titles: Vec<_> = db
            .activities
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Morning Walk", "Lunch", "Dinner"]);
    }

    #[tokio::test]
    async fn filters_by_pet() {
        let (db, rex) = setup_test_db().await;
        let milo = db.pets.insert(&Pet::new("Milo", "Beagle")).await.unwrap();
        let dt = date(2025, 6, 1).at(8, 0, 0, 0);
        db.activities
            .insert(&Activity::new(ActivityType::Walk, "Rex walk", dt, rex))
            .await
            .unwrap();
        db.activities
            .insert(&Activity::new(ActivityType::Walk, "Milo walk", dt, milo))
            .await
            .unwrap();

        let list = db.activities.list_by_pet(milo).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Milo walk");
    }

    #[tokio::test]
    async fn deleting_pet_cascades() {
        let (db, pet_id) = setup_test_db().await;
        let dt = date(2025, 6, 1).at(8, 0, 0, 0);
        let id = db
            .activities
            .insert(&Activity::new(ActivityType::Walk, "Walk", dt, pet_id))
            .await
            .unwrap();

        let mut stream = db.activities.watch_all();
        assert_eq!(stream.next().await.unwrap().unwrap().len(), 1);

        db.pets.delete(pet_id).await.unwrap();

        assert!(db.activities.get(id).await.unwrap().is_none());
        assert!(stream.next().await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn watch_by_pet_follows_inserts_and_deletes() {
        let (db, pet_id) = setup_test_db().await;
        let mut stream = db.activities.watch_by_pet(pet_id);
        assert!(stream.next().await.unwrap().unwrap().is_empty());

        let dt = date(2025, 6, 1).at(8, 0, 0, 0);
        let id = db
            .activities
            .insert(&Activity::new(ActivityType::Walk, "Walk", dt, pet_id))
            .await
            .unwrap();
        assert_eq!(stream.next().await.unwrap().unwrap().len(), 1);

        db.activities.delete(id).await.unwrap();
        assert!(stream.next().await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_stored_type() {
        let (db, pet_id) = setup_test_db().await;
        sqlx::query("INSERT INTO activities (type, title, date_time, pet_id) VALUES ('GROOMING', 'Bath', '2025-06-01T08:00:00', ?)")
            .bind(pet_id)
            .execute(&db.pool)
            .await
            .unwrap();

        let err = db.activities.list_all().await.unwrap_err();
        assert!(matches!(err, sqlx::Error::ColumnDecode { .. }));
    }
}
