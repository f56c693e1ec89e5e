//! Repository for the `museums` table.

use museum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::museum::{Museum, NewMuseum};

/// Column list for `museums` queries.
const COLUMNS: &str = "id, name, location, description, image_url";

/// Provides data access for museums.
pub struct MuseumRepo;

impl MuseumRepo {
    /// List every museum in storage order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums");
        sqlx::query_as::<_, Museum>(&query).fetch_all(conn).await
    }

    /// Find a museum by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums WHERE id = $1");
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a museum, returning the stored row with its assigned ID.
    pub async fn create(conn: &mut PgConnection, dto: &NewMuseum) -> Result<Museum, sqlx::Error> {
        let query = format!(
            "INSERT INTO museums (name, location, description, image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(&dto.name)
            .bind(&dto.location)
            .bind(&dto.description)
            .bind(&dto.image_url)
            .fetch_one(conn)
            .await
    }

    /// Replace all four fields of a museum.
    ///
    /// Returns `None` if no row has the given ID.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        dto: &NewMuseum,
    ) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!(
            "UPDATE museums SET \
                 name = $2, \
                 location = $3, \
                 description = $4, \
                 image_url = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.location)
            .bind(&dto.description)
            .bind(&dto.image_url)
            .fetch_optional(conn)
            .await
    }

    /// Delete a museum by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM museums WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
