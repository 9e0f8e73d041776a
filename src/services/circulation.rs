//! Circulation service: login, listings, checkout and return

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{MyBook, TitleListing},
    repository::CirculationStore,
    session::{Identity, SessionState},
};

#[derive(Clone)]
pub struct CirculationService {
    store: Arc<dyn CirculationStore>,
}

impl CirculationService {
    pub fn new(store: Arc<dyn CirculationStore>) -> Self {
        Self { store }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Sign a patron in when name and card number match the same record.
    ///
    /// On mismatch the session is left as it was.
    pub async fn login(
        &self,
        session: &SessionState,
        name: &str,
        card_num: i32,
    ) -> AppResult<Identity> {
        let patron = match self.store.find_patron(name, card_num).await? {
            Some(patron) => patron,
            None => {
                tracing::info!(card_num, "Login rejected");
                return Err(AppError::Authentication(
                    "Name and card number do not match".to_string(),
                ));
            }
        };

        let identity = Identity {
            name: patron.name,
            card_num: patron.card_num,
        };
        session.sign_in(identity.clone()).await;
        tracing::info!(card_num, "Patron logged in");
        Ok(identity)
    }

    pub async fn logout(&self, session: &SessionState) {
        session.sign_out().await;
        tracing::info!("Session cleared");
    }

    /// Every title in the catalog, ordered by isbn
    pub async fn list_all_titles(&self) -> AppResult<Vec<TitleListing>> {
        self.store.list_titles().await
    }

    /// Books out to the signed-in patron
    pub async fn list_my_books(&self, session: &SessionState) -> AppResult<Vec<MyBook>> {
        let identity = session.require().await?;
        self.store.list_checked_out(identity.card_num).await
    }

    /// Check a copy out to the signed-in patron
    pub async fn checkout_book(&self, session: &SessionState, serial: i32) -> AppResult<()> {
        let identity = session.require().await?;
        self.store.check_out(serial, identity.card_num).await?;
        tracing::info!(serial, card_num = identity.card_num, "Copy checked out");
        Ok(())
    }

    /// Return a copy held by the signed-in patron
    pub async fn return_book(&self, session: &SessionState, serial: i32) -> AppResult<()> {
        let identity = session.require().await?;
        self.store.check_in(serial, identity.card_num).await?;
        tracing::info!(serial, card_num = identity.card_num, "Copy returned");
        Ok(())
    }
}
