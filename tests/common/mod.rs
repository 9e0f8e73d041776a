//! In-memory circulation store shared by the integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use stacks_server::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{Checkout, InventoryCopy, MyBook, Patron, Title, TitleListing},
    repository::CirculationStore,
    AppState,
};

#[derive(Default)]
struct Tables {
    patrons: BTreeMap<i32, Patron>,
    titles: BTreeMap<String, Title>,
    inventory: BTreeMap<i32, InventoryCopy>,
    checked_out: BTreeMap<i32, Checkout>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patron(self, card_num: i32, name: &str) -> Self {
        self.tables.lock().unwrap().patrons.insert(
            card_num,
            Patron {
                card_num,
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_title(self, isbn: &str, title: &str, author: &str) -> Self {
        self.tables.lock().unwrap().titles.insert(
            isbn.to_string(),
            Title {
                isbn: isbn.to_string(),
                title: title.to_string(),
                author: author.to_string(),
            },
        );
        self
    }

    pub fn with_copy(self, serial: i32, isbn: &str) -> Self {
        self.tables.lock().unwrap().inventory.insert(
            serial,
            InventoryCopy {
                serial,
                isbn: isbn.to_string(),
            },
        );
        self
    }

    /// Insert a checkout row directly, bypassing every check
    pub fn with_raw_checkout(self, serial: i32, card_num: i32) -> Self {
        self.tables
            .lock()
            .unwrap()
            .checked_out
            .insert(serial, Checkout { serial, card_num });
        self
    }

    pub fn checkouts_for_serial(&self, serial: i32) -> usize {
        self.tables
            .lock()
            .unwrap()
            .checked_out
            .values()
            .filter(|c| c.serial == serial)
            .count()
    }

    /// Alice and Bob, Dune with copy 5, Neuromancer with two copies, catalog-only Solaris
    pub fn library() -> Self {
        Self::new()
            .with_patron(100, "Alice")
            .with_patron(101, "Bob")
            .with_title("0001", "Dune", "Herbert")
            .with_title("0002", "Neuromancer", "Gibson")
            .with_title("0003", "Solaris", "Lem")
            .with_copy(5, "0001")
            .with_copy(9, "0002")
            .with_copy(7, "0002")
    }
}

#[async_trait]
impl CirculationStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_patron(&self, name: &str, card_num: i32) -> AppResult<Option<Patron>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .patrons
            .get(&card_num)
            .filter(|p| p.name == name)
            .cloned())
    }

    async fn list_titles(&self) -> AppResult<Vec<TitleListing>> {
        let tables = self.tables.lock().unwrap();
        let listings = tables
            .titles
            .values()
            .map(|title| {
                let serial = tables
                    .inventory
                    .values()
                    .filter(|copy| copy.isbn == title.isbn)
                    .map(|copy| copy.serial)
                    .min();
                let mut listing = TitleListing::on_shelf(title.clone(), serial);
                if let Some(checkout) = serial.and_then(|s| tables.checked_out.get(&s)) {
                    if let Some(patron) = tables.patrons.get(&checkout.card_num) {
                        listing.name = patron.name.clone();
                    }
                }
                listing
            })
            .collect();
        Ok(listings)
    }

    async fn list_checked_out(&self, card_num: i32) -> AppResult<Vec<MyBook>> {
        let tables = self.tables.lock().unwrap();
        tables
            .checked_out
            .values()
            .filter(|c| c.card_num == card_num)
            .map(|c| {
                tables
                    .inventory
                    .get(&c.serial)
                    .and_then(|copy| tables.titles.get(&copy.isbn))
                    .map(|title| MyBook {
                        title: title.title.clone(),
                        author: title.author.clone(),
                        serial: c.serial,
                    })
                    .ok_or_else(|| {
                        AppError::Integrity(format!("orphan checkout for serial {}", c.serial))
                    })
            })
            .collect()
    }

    async fn check_out(&self, serial: i32, card_num: i32) -> AppResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.inventory.contains_key(&serial) {
            return Err(AppError::NotFound(format!("No copy with serial {}", serial)));
        }
        if tables.checked_out.contains_key(&serial) {
            return Err(AppError::Conflict(format!("Copy {} is already checked out", serial)));
        }
        tables
            .checked_out
            .insert(serial, Checkout { serial, card_num });
        Ok(())
    }

    async fn check_in(&self, serial: i32, card_num: i32) -> AppResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let held = tables.checked_out.get(&serial).map(|c| c.card_num) == Some(card_num);
        if !held {
            return Err(AppError::NotFound(format!(
                "Copy {} is not checked out to card {}",
                serial, card_num
            )));
        }
        tables.checked_out.remove(&serial);
        Ok(())
    }
}

pub fn app_state(store: MemoryStore) -> AppState {
    AppState::new(AppConfig::default(), Arc::new(store))
}
