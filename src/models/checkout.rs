//! Active checkout model and the patron's own-books view

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Active loan: this copy is out to this patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Checkout {
    pub serial: i32,
    pub card_num: i32,
}

/// A book currently checked out by the signed-in patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MyBook {
    pub title: String,
    pub author: String,
    pub serial: i32,
}

/// Raw joined row; title columns are null when the checkout points at
/// a copy or title that no longer exists.
#[derive(Debug, Clone, FromRow)]
pub struct MyBookRow {
    pub serial: i32,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl TryFrom<MyBookRow> for MyBook {
    type Error = AppError;

    fn try_from(row: MyBookRow) -> AppResult<Self> {
        match (row.title, row.author) {
            (Some(title), Some(author)) => Ok(MyBook {
                title,
                author,
                serial: row.serial,
            }),
            _ => Err(AppError::Integrity(format!(
                "Checkout of serial {} references a missing copy or title",
                row.serial
            ))),
        }
    }
}
