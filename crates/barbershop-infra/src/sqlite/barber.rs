//! SQLite barber repository implementation.
//!
//! Implements `BarberRepository` from `barbershop-core` using sqlx with split read/write pools.

use barbershop_core::repository::barber::BarberRepository;
use barbershop_types::barber::{Barber, BarberId, BarberRequest};
use barbershop_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `BarberRepository`.
pub struct SqliteBarberRepository {
    pool: DatabasePool,
}

impl SqliteBarberRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Map a row of `barber` to the domain type. NULL text columns read as "".
fn barber_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Barber, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    let name: Option<String> = row.try_get("name")?;
    let address: Option<String> = row.try_get("address")?;
    let phone: Option<String> = row.try_get("phone")?;

    Ok(Barber {
        id: BarberId(id),
        name: name.unwrap_or_default(),
        address: address.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
    })
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}

impl BarberRepository for SqliteBarberRepository {
    async fn list(&self) -> Result<Vec<Barber>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, address, phone FROM barber ORDER BY id")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(|row| barber_from_row(row).map_err(map_sqlx_error))
            .collect()
    }

    async fn get_by_id(&self, id: BarberId) -> Result<Option<Barber>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, address, phone FROM barber WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref()
            .map(barber_from_row)
            .transpose()
            .map_err(map_sqlx_error)
    }

    async fn create(&self, request: &BarberRequest) -> Result<Barber, RepositoryError> {
        let result = sqlx::query("INSERT INTO barber (name, address, phone) VALUES (?, ?, ?)")
            .bind(&request.name)
            .bind(&request.address)
            .bind(&request.phone)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        // `id INTEGER PRIMARY KEY` without AUTOINCREMENT: SQLite picks max(id) + 1,
        // so the id of a deleted highest row can be handed out again. New ids
        // never collide with live rows.
        let id = BarberId(result.last_insert_rowid());
        Ok(request.clone().into_barber(id))
    }

    async fn update(&self, barber: &Barber) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE barber SET name = ?, address = ?, phone = ? WHERE id = ?")
            .bind(&barber.name)
            .bind(&barber.address)
            .bind(&barber.phone)
            .bind(barber.id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: BarberId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM barber WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
