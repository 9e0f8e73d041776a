//! Title (bibliographic record) model and catalog listing row

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Bibliographic record, independent of physical copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Title {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

/// One catalog row: a title with its representative copy and current holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TitleListing {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Lowest copy serial for the title, `null` when the library owns no copy
    pub serial: Option<i32>,
    /// Name of the patron holding that copy, empty when it is on the shelf
    pub name: String,
}

impl TitleListing {
    /// Listing row for a title with no copies or an available copy
    pub fn on_shelf(title: Title, serial: Option<i32>) -> Self {
        Self {
            isbn: title.isbn,
            title: title.title,
            author: title.author,
            serial,
            name: String::new(),
        }
    }
}
