//! PostGIS table replacement.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use wkt::ToWkt;

use crate::error::{ImportError, ImportResult};
use crate::import::Feature;

/// Writes combined features into a PostGIS-enabled database.
pub struct PostgisWriter {
    pool: PgPool,
}

impl PostgisWriter {
    /// Connect to the database.
    pub async fn connect(database_url: &str) -> ImportResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Replace the target table with the given features.
    ///
    /// Destructive and non-incremental: the prior table is dropped, the
    /// schema recreated, and every feature inserted in order inside one
    /// transaction. Geometry is stored as SRID 4326.
    pub async fn replace_table(&self, table: &str, features: &[Feature]) -> ImportResult<u64> {
        validate_table_name(table)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;

        sqlx::query(&format!(
            "CREATE TABLE {table} (
                id SERIAL PRIMARY KEY,
                layer_name TEXT NOT NULL,
                name TEXT,
                description TEXT,
                geometry geometry(Geometry, 4326)
            )"
        ))
        .execute(&mut *tx)
        .await?;

        let insert = format!(
            "INSERT INTO {table} (layer_name, name, description, geometry) \
             VALUES ($1, $2, $3, ST_GeomFromText($4, 4326))"
        );

        for feature in features {
            sqlx::query(&insert)
                .bind(&feature.layer_name)
                .bind(&feature.name)
                .bind(&feature.description)
                .bind(feature.geometry.wkt_string())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(table, rows = features.len(), "wrote features to PostGIS");

        Ok(features.len() as u64)
    }
}

/// The table name is interpolated into DDL, so restrict it to a plain
/// identifier.
fn validate_table_name(table: &str) -> ImportResult<()> {
    let valid = !table.is_empty()
        && !table.starts_with(|c: char| c.is_ascii_digit())
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ImportError::InvalidTableName(table.to_string()))
    }
}
