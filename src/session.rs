//! Process-wide session slot
//!
//! Holds at most one signed-in patron for the whole server. A second login
//! silently replaces the first (last write wins); the lock only guards
//! memory access, it does not serialize callers' intents.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// The signed-in patron. Name and card number are always set together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub card_num: i32,
}

/// Wire view of the slot: `card_num` is `null` and `name` is empty when
/// nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionView {
    pub card_num: Option<i32>,
    pub name: String,
}

impl From<Option<Identity>> for SessionView {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self {
                card_num: Some(identity.card_num),
                name: identity.name,
            },
            None => Self {
                card_num: None,
                name: String::new(),
            },
        }
    }
}

/// Shared handle to the single session slot
#[derive(Clone, Default)]
pub struct SessionState {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current identity, if any
    pub async fn current(&self) -> Option<Identity> {
        self.slot.read().await.clone()
    }

    /// Current identity, or an authentication error when the slot is empty
    pub async fn require(&self) -> AppResult<Identity> {
        self.current()
            .await
            .ok_or_else(|| AppError::Authentication("No patron is logged in".to_string()))
    }

    pub async fn sign_in(&self, identity: Identity) {
        *self.slot.write().await = Some(identity);
    }

    pub async fn sign_out(&self) {
        *self.slot.write().await = None;
    }
}
