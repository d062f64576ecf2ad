//! SQLite-backed address store.
//!
//! Each operation borrows one connection from the pool for the duration of
//! the query; the connection goes back to the pool when the query future
//! completes or is dropped, including on error paths.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use addressbook_core::{Address, AddressId, NewAddress};

use super::r#trait::{AddressStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS addresses (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        address   TEXT NOT NULL,
        latitude  REAL NOT NULL,
        longitude REAL NOT NULL
    )
"#;

/// SQLite-backed address store.
///
/// `AUTOINCREMENT` keeps ids monotonic and prevents reuse of ids that
/// belonged to deleted rows.
#[derive(Debug, Clone)]
pub struct SqliteAddressStore {
    pool: SqlitePool,
}

impl SqliteAddressStore {
    /// Open (creating if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        tracing::info!(database_url, "connected to sqlite address store");
        Self::with_pool(pool).await
    }

    /// Private in-memory database (tests/dev).
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool, creating the `addresses` table if needed.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_address(row: &SqliteRow) -> Result<Address, sqlx::Error> {
    Ok(Address {
        id: AddressId::new(row.try_get::<i64, _>("id")?),
        address: row.try_get("address")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
    })
}

#[async_trait]
impl AddressStore for SqliteAddressStore {
    async fn create(&self, address: NewAddress) -> Result<Address, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO addresses (address, latitude, longitude)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&address.address)
        .bind(address.latitude)
        .bind(address.longitude)
        .execute(&self.pool)
        .await?;

        let id = AddressId::new(result.last_insert_rowid());
        tracing::debug!(%id, "address created");
        Ok(address.with_id(id))
    }

    async fn get(&self, id: AddressId) -> Result<Address, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, address, latitude, longitude
            FROM addresses
            WHERE id = ?1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(row_to_address(&row)?),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn update(&self, id: AddressId, fields: NewAddress) -> Result<Address, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET address = ?1, latitude = ?2, longitude = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&fields.address)
        .bind(fields.latitude)
        .bind(fields.longitude)
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(fields.with_id(id))
    }

    async fn delete(&self, id: AddressId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Address>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, address, latitude, longitude
            FROM addresses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row_to_address(row).map_err(StoreError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteAddressStore {
        SqliteAddressStore::in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let store = store().await;
        let created = store
            .create(NewAddress::new("Unter den Linden 1, Berlin", 52.5170, 13.3889))
            .await
            .unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.address, "Unter den Linden 1, Berlin");
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = store().await;
        let created = store.create(NewAddress::new("A", 1.0, 2.0)).await.unwrap();

        let updated = store
            .update(created.id, NewAddress::new("B", -3.5, 4.25))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(created.id).await.unwrap(), updated);
        assert_eq!(updated.fields(), NewAddress::new("B", -3.5, 4.25));
    }

    #[tokio::test]
    async fn delete_removes_record_and_id_is_not_reused() {
        let store = store().await;
        let first = store.create(NewAddress::new("A", 0.0, 0.0)).await.unwrap();
        let second = store.create(NewAddress::new("B", 0.0, 0.0)).await.unwrap();

        store.delete(second.id).await.unwrap();
        assert!(store.get(second.id).await.unwrap_err().is_not_found());

        let third = store.create(NewAddress::new("C", 0.0, 0.0)).await.unwrap();
        assert!(third.id > second.id);
        assert_eq!(store.list_all().await.unwrap(), vec![first, third]);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = store().await;
        let kept = store.create(NewAddress::new("A", 0.0, 0.0)).await.unwrap();
        let missing = AddressId::new(kept.id.get() + 100);

        assert!(store.get(missing).await.unwrap_err().is_not_found());
        assert!(
            store
                .update(missing, NewAddress::new("X", 9.0, 9.0))
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(store.delete(missing).await.unwrap_err().is_not_found());
        assert_eq!(store.list_all().await.unwrap(), vec![kept]);
    }
}
