//! Sale entity - one row of the remote `sales` ledger table.
//!
//! Each sale records a purchase event: the customer's name, a denormalized
//! text snapshot of the product description, the charged amount, a
//! display-formatted timestamp, and the paid flag. `producto` is plain text,
//! not a foreign key - renaming or deleting a catalog product never changes
//! historical rows. The separate `created_at` timestamp is the sortable
//! value used for date-range filtering; `fecha` is display-only.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer name, free text (expected to match the roster)
    #[sea_orm(column_name = "cliente")]
    pub customer: String,
    /// Product description snapshot, suffixed with `(xN)` for quantity > 1
    #[sea_orm(column_name = "producto")]
    pub description: String,
    /// Charged amount = unit price x quantity at the time of sale, immutable
    #[sea_orm(column_name = "precio")]
    pub amount: i64,
    /// Display-formatted timestamp string, snapshotted at registration
    #[sea_orm(column_name = "fecha")]
    pub display_date: String,
    /// Whether the charge has been settled
    #[sea_orm(column_name = "pagado")]
    pub paid: bool,
    /// Creation timestamp, used only for date-range filtering
    pub created_at: DateTimeUtc,
}

/// No relations by design; see the module docs.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
