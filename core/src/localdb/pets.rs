// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::Pet;
use crate::localdb::live::{Changes, LiveStream, Table, live};

const COLUMNS: &str = "\
id, name, breed, age, weight, sex, color, microchip_id, allergies, medications, vet_name, vet_phone, notes, image_uri";

#[derive(Debug, Clone)]
pub struct Pets {
    pool: SqlitePool,
    changes: Arc<Changes>,
}

impl Pets {
    pub fn new(pool: SqlitePool, changes: Arc<Changes>) -> Self {
        Self { pool, changes }
    }

    /// Inserts the pet, or replaces the row with the same id. Returns the row id.
    pub async fn insert(&self, pet: &Pet) -> Result<i64, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO pets (id, name, breed, age, weight, sex, color, microchip_id, allergies, medications, vet_name, vet_phone, notes, image_uri)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    name         = excluded.name,
    breed        = excluded.breed,
    age          = excluded.age,
    weight       = excluded.weight,
    sex          = excluded.sex,
    color        = excluded.color,
    microchip_id = excluded.microchip_id,
    allergies    = excluded.allergies,
    medications  = excluded.medications,
    vet_name     = excluded.vet_name,
    vet_phone    = excluded.vet_phone,
    notes        = excluded.notes,
    image_uri    = excluded.image_uri
RETURNING id;
";

        let (id,): (i64,) = sqlx::query_as(SQL)
            .bind((pet.id != 0).then_some(pet.id))
            .bind(&pet.name)
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(pet.weight)
            .bind(&pet.sex)
            .bind(&pet.color)
            .bind(&pet.microchip_id)
            .bind(&pet.allergies)
            .bind(&pet.medications)
            .bind(&pet.vet_name)
            .bind(&pet.vet_phone)
            .bind(&pet.notes)
            .bind(&pet.image_uri)
            .fetch_one(&self.pool)
            .await?;

        self.changes.notify(Table::Pets);
        Ok(id)
    }

    pub async fn update(&self, pet: &Pet) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
UPDATE pets SET
    name = ?, breed = ?, age = ?, weight = ?, sex = ?, color = ?, microchip_id = ?,
    allergies = ?, medications = ?, vet_name = ?, vet_phone = ?, notes = ?, image_uri = ?
WHERE id = ?;
";

        sqlx::query(SQL)
            .bind(&pet.name)
            .bind(&pet.breed)
            .bind(pet.age)
            .bind(pet.weight)
            .bind(&pet.sex)
            .bind(&pet.color)
            .bind(&pet.microchip_id)
            .bind(&pet.allergies)
            .bind(&pet.medications)
            .bind(&pet.vet_name)
            .bind(&pet.vet_phone)
            .bind(&pet.notes)
            .bind(&pet.image_uri)
            .bind(pet.id)
            .execute(&self.pool)
            .await?;

        self.changes.notify(Table::Pets);
        Ok(())
    }

    /// Deletes the pet and, through the foreign key, its activities.
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        const SQL: &str = "DELETE FROM pets WHERE id = ?;";

        sqlx::query(SQL).bind(id).execute(&self.pool).await?;

        self.changes.notify(Table::Pets);
        self.changes.notify(Table::Activities);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Pet>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM pets WHERE id = ?;");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All pets ordered by name.
    pub async fn list_all(&self) -> Result<Vec<Pet>, sqlx::Error> {
        list_all(&self.pool).await
    }

    /// The pet with the lowest id.
    pub async fn first(&self) -> Result<Option<Pet>, sqlx::Error> {
        first(&self.pool).await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        const SQL: &str = "SELECT COUNT(*) FROM pets;";
        let (count,): (i64,) = sqlx::query_as(SQL).fetch_one(&self.pool).await?;
        Ok(count)
    }

    pub fn watch_all(&self) -> LiveStream<Vec<Pet>> {
        let pool = self.pool.clone();
        live(self.changes.subscribe(Table::Pets), move || {
            let pool = pool.clone();
            async move { list_all(&pool).await }
        })
    }

    pub fn watch_first(&self) -> LiveStream<Option<Pet>> {
        let pool = self.pool.clone();
        live(self.changes.subscribe(Table::Pets), move || {
            let pool = pool.clone();
            async move { first(&pool).await }
        })
    }
}

async fn list_all(pool: &SqlitePool) -> Result<Vec<Pet>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM pets ORDER BY name ASC, id ASC;");
    sqlx::query_as(&sql).fetch_all(pool).await
}

async fn first(pool: &SqlitePool) -> Result<Option<Pet>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM pets ORDER BY id ASC LIMIT 1;");
    sqlx::query_as(&sql).fetch_optional(pool).await
}
