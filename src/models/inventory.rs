//! Inventory copy (physical, serially numbered copy of a title)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryCopy {
    pub serial: i32,
    pub isbn: String,
}
