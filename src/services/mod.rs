//! Business logic services

pub mod circulation;

use std::sync::Arc;

use crate::repository::CirculationStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub circulation: circulation::CirculationService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn CirculationStore>) -> Self {
        Self {
            circulation: circulation::CirculationService::new(store),
        }
    }
}
