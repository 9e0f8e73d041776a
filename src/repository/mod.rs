//! Repository layer for database operations

pub mod catalog;
pub mod circulation;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{MyBook, Patron, TitleListing},
};

/// Store operations the circulation service relies on.
///
/// Writes are atomic per call; there is no isolation across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CirculationStore: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;

    /// Patron whose name and card number both match
    async fn find_patron(&self, name: &str, card_num: i32) -> AppResult<Option<Patron>>;

    /// Every title once, with its lowest-serial copy and that copy's holder
    async fn list_titles(&self) -> AppResult<Vec<TitleListing>>;

    /// Books currently out to the given card
    async fn list_checked_out(&self, card_num: i32) -> AppResult<Vec<MyBook>>;

    /// Record `serial` as out to `card_num`.
    /// `NotFound` if the copy does not exist, `Conflict` if it is already out.
    async fn check_out(&self, serial: i32, card_num: i32) -> AppResult<()>;

    /// Remove the checkout of `serial` held by `card_num`.
    /// `NotFound` if there is no such checkout.
    async fn check_in(&self, serial: i32, card_num: i32) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub catalog: catalog::CatalogRepository,
    pub circulation: circulation::CirculationRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            catalog: catalog::CatalogRepository::new(pool.clone()),
            circulation: circulation::CirculationRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CirculationStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_patron(&self, name: &str, card_num: i32) -> AppResult<Option<Patron>> {
        self.circulation.find_patron(name, card_num).await
    }

    async fn list_titles(&self) -> AppResult<Vec<TitleListing>> {
        self.catalog.list_titles().await
    }

    async fn list_checked_out(&self, card_num: i32) -> AppResult<Vec<MyBook>> {
        self.circulation.list_checked_out(card_num).await
    }

    async fn check_out(&self, serial: i32, card_num: i32) -> AppResult<()> {
        self.circulation.check_out(serial, card_num).await
    }

    async fn check_in(&self, serial: i32, card_num: i32) -> AppResult<()> {
        self.circulation.check_in(serial, card_num).await
    }
}
