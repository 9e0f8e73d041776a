//! Data models for the circulation server

pub mod checkout;
pub mod inventory;
pub mod patron;
pub mod title;

// Re-export commonly used types
pub use checkout::{Checkout, MyBook};
pub use inventory::InventoryCopy;
pub use patron::Patron;
pub use title::{Title, TitleListing};
