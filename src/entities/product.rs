//! Product entity - one row of the remote `products` table.
//!
//! Products are the storefront catalog: a name, a unit price in the smallest
//! display unit, a stock count, and optional display metadata. The remote
//! store uses Spanish column names; the Rust fields map onto them with
//! explicit `column_name` attributes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Store-assigned identifier, stable for the product's lifetime
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name (unique by convention, not enforced by the store)
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    /// Unit price in the smallest display unit (integer currency)
    #[sea_orm(column_name = "precio")]
    pub price: i64,
    /// Units currently in stock
    pub stock: i64,
    /// Optional emoji glyph shown when no image is configured
    pub emoji: Option<String>,
    /// Optional image URL
    #[sea_orm(column_name = "imagen")]
    pub image: Option<String>,
    /// When the product was created; never modified by updates
    pub created_at: DateTimeUtc,
}

/// Products deliberately have no relations: ledger rows reference them by
/// denormalized name text, not by key, so history survives catalog edits.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
