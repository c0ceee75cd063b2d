//! Ledger business logic - reads, filtering, debt aggregation, deletion,
//! and settlement.
//!
//! Filtering and aggregation run over the in-memory snapshot, the same way
//! every view of the storefront works: fetch everything, derive on demand.
//! Outstanding debt is recomputed from scratch on each evaluation and never
//! cached. O(snapshot) per recompute is fine at tens to low thousands of
//! rows.

use crate::{
    entities::{Sale, sale},
    errors::{Error, Result},
};
use chrono::{Local, NaiveDate};
use sea_orm::{ModelTrait, QueryOrder, prelude::*, sea_query::Expr};

/// An inclusive range of local calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day included
    pub from: NaiveDate,
    /// Last day included
    pub to: NaiveDate,
}

/// Conjunctive ledger filter; an absent criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    /// Case-insensitive substring over the customer name
    pub customer: Option<String>,
    /// Case-insensitive substring over the product description
    pub product: Option<String>,
    /// Keep only unsettled rows (always on in the admin view)
    pub unpaid_only: bool,
    /// Inclusive local-day range over the row's creation timestamp
    pub date_range: Option<DateRange>,
}

impl LedgerFilter {
    /// Whether a ledger row satisfies every configured criterion.
    #[must_use]
    pub fn matches(&self, record: &sale::Model) -> bool {
        if let Some(needle) = &self.customer {
            if !record
                .customer
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(needle) = &self.product {
            if !record
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if self.unpaid_only && record.paid {
            return false;
        }

        if let Some(range) = self.date_range {
            // The sortable creation timestamp decides range membership, not
            // the display string; boundaries are whole local days.
            let day = record.created_at.with_timezone(&Local).date_naive();
            if day < range.from || day > range.to {
                return false;
            }
        }

        true
    }
}

/// Retrieves the full ledger, newest first.
///
/// # Errors
/// Returns an error if the store query fails.
pub async fn get_all_sales(db: &DatabaseConnection) -> Result<Vec<sale::Model>> {
    Sale::find()
        .order_by_desc(sale::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies a filter to a ledger snapshot.
#[must_use]
pub fn filter_sales<'a>(sales: &'a [sale::Model], filter: &LedgerFilter) -> Vec<&'a sale::Model> {
    sales.iter().filter(|s| filter.matches(s)).collect()
}

/// Outstanding debt for a filter scope: the sum of charged amounts over
/// unpaid rows matching every criterion. An empty matched set sums to 0.
#[must_use]
pub fn outstanding_total(sales: &[sale::Model], filter: &LedgerFilter) -> i64 {
    sales
        .iter()
        .filter(|s| !s.paid && filter.matches(s))
        .map(|s| s.amount)
        .sum()
}

/// Removes a single ledger row (admin correction).
///
/// # Errors
/// Returns an error if the row does not exist or the delete fails.
pub async fn delete_sale(db: &DatabaseConnection, sale_id: i64) -> Result<()> {
    let record = Sale::find_by_id(sale_id)
        .one(db)
        .await?
        .ok_or(Error::SaleNotFound { id: sale_id })?;

    record.delete(db).await?;
    Ok(())
}

/// Marks a set of ledger rows as paid in one bulk update.
///
/// The ids are a point-in-time snapshot of the filtered set, passed
/// explicitly so rows inserted after filter evaluation are never swept in.
/// Only unpaid rows are touched, which makes re-settling an already-paid
/// set a no-op. Returns how many rows were actually settled.
///
/// # Errors
/// Returns an error if the store update fails.
pub async fn settle(db: &DatabaseConnection, sale_ids: &[i64]) -> Result<u64> {
    if sale_ids.is_empty() {
        return Ok(0);
    }

    let result = Sale::update_many()
        .col_expr(sale::Column::Paid, Expr::value(true))
        .filter(sale::Column::Id.is_in(sale_ids.iter().copied()))
        .filter(sale::Column::Paid.eq(false))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
