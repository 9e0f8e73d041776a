//! Circulation repository: patrons and active checkouts

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{checkout::MyBookRow, MyBook, Patron},
};

#[derive(Clone)]
pub struct CirculationRepository {
    pool: Pool<Postgres>,
}

impl CirculationRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Find a patron by exact name and card number
    pub async fn find_patron(&self, name: &str, card_num: i32) -> AppResult<Option<Patron>> {
        let patron = sqlx::query_as::<_, Patron>(
            "SELECT card_num, name FROM patrons WHERE name = $1 AND card_num = $2",
        )
        .bind(name)
        .bind(card_num)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patron)
    }

    /// Books currently checked out to a card
    pub async fn list_checked_out(&self, card_num: i32) -> AppResult<Vec<MyBook>> {
        let rows = sqlx::query_as::<_, MyBookRow>(
            r#"
            SELECT c.serial, t.title, t.author
            FROM checked_out c
            LEFT JOIN inventory i ON i.serial = c.serial
            LEFT JOIN titles t ON t.isbn = i.isbn
            WHERE c.card_num = $1
            ORDER BY c.serial
            "#,
        )
        .bind(card_num)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MyBook::try_from).collect()
    }

    /// Check a copy out to a card
    pub async fn check_out(&self, serial: i32, card_num: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventory WHERE serial = $1)")
                .bind(serial)
                .fetch_one(&mut *tx)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("No copy with serial {}", serial)));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO checked_out (serial, card_num)
            VALUES ($1, $2)
            ON CONFLICT (serial) DO NOTHING
            "#,
        )
        .bind(serial)
        .bind(card_num)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Copy {} is already checked out",
                serial
            )));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Return a copy held by a card
    pub async fn check_in(&self, serial: i32, card_num: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM checked_out WHERE serial = $1 AND card_num = $2")
            .bind(serial)
            .bind(card_num)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Copy {} is not checked out to card {}",
                serial, card_num
            )));
        }

        tx.commit().await?;
        Ok(())
    }
}
