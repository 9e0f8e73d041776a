//! Catalog repository: titles and their physical copies

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::TitleListing};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all titles with their representative copy and its holder.
    ///
    /// Titles with several copies report only the lowest serial.
    pub async fn list_titles(&self) -> AppResult<Vec<TitleListing>> {
        let rows = sqlx::query_as::<_, TitleListing>(
            r#"
            SELECT t.isbn, t.title, t.author,
                   inv.serial,
                   COALESCE(p.name, '') AS name
            FROM titles t
            LEFT JOIN LATERAL (
                SELECT i.serial
                FROM inventory i
                WHERE i.isbn = t.isbn
                ORDER BY i.serial
                LIMIT 1
            ) inv ON TRUE
            LEFT JOIN checked_out c ON c.serial = inv.serial
            LEFT JOIN patrons p ON p.card_num = c.card_num
            ORDER BY t.isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
