//! Sale registration business logic.
//!
//! Registering a sale validates the customer against the roster, confirms
//! the PIN for self-service purchases (admin direct entry skips the PIN:
//! the admin session itself is the authorization), checks stock
//! sufficiency, and then writes one unpaid ledger row plus the product's
//! new stock value in a single store transaction. Callers refresh the
//! snapshot afterwards; nothing here updates state optimistically.

use crate::{
    config::customers::Roster,
    core::identity,
    entities::{Product, product, sale},
    errors::{Error, Result},
};
use chrono::{Datelike, Local, NaiveDateTime, Timelike, Utc};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};

/// Abbreviated Spanish month names for the display timestamp.
const SPANISH_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// How a sale registration is authorized.
#[derive(Debug, Clone)]
pub enum SaleAuthorization {
    /// Self-service purchase from the catalog: the customer confirms with
    /// their PIN, checked before any write.
    CustomerPin(String),
    /// Direct entry from the admin panel. No PIN; the operator chooses the
    /// timestamp that will be displayed on the ledger row.
    AdminEntry {
        /// Operator-chosen local timestamp for the ledger row
        entered_at: NaiveDateTime,
    },
}

/// Renders a moment as the fixed display format used on ledger rows:
/// two-digit day, abbreviated Spanish month, 12-hour clock.
#[must_use]
pub fn format_sale_timestamp(moment: NaiveDateTime) -> String {
    let month = SPANISH_MONTHS[moment.month0() as usize];
    let (hour, meridiem) = match moment.hour() {
        0 => (12, "a. m."),
        h @ 1..=11 => (h, "a. m."),
        12 => (12, "p. m."),
        h => (h - 12, "p. m."),
    };

    format!(
        "{:02} {}, {:02}:{:02} {}",
        moment.day(),
        month,
        hour,
        moment.minute(),
        meridiem
    )
}

/// Registers a sale: validates, then inserts one unpaid ledger row and
/// writes the decremented stock, both inside one store transaction.
///
/// `product` is the caller's snapshot of the catalog row. The stock write
/// is absolute (`snapshot stock - quantity`), so two sessions racing on the
/// same product keep last-write-wins semantics - there is no check-and-set.
/// `quantity` defaults to 1.
///
/// # Errors
/// Returns an error if:
/// - `customer` is empty or not on the roster (`MissingIdentity`)
/// - The PIN does not match for a self-service purchase
///   (`AuthenticationFailed`), checked before any write
/// - `quantity` is less than 1 (`InvalidQuantity`)
/// - `quantity` exceeds the snapshot stock (`InsufficientStock`); no
///   partial fulfillment
/// - Either store write fails (`Store`); the transaction leaves both
///   tables untouched in that case
pub async fn register_sale(
    db: &DatabaseConnection,
    roster: &Roster,
    customer: &str,
    product: &product::Model,
    quantity: Option<i64>,
    authorization: SaleAuthorization,
) -> Result<sale::Model> {
    if customer.is_empty() || !roster.contains(customer) {
        return Err(Error::MissingIdentity);
    }

    let entered_at = match &authorization {
        SaleAuthorization::CustomerPin(entered) => {
            if !identity::check_customer_pin(roster, customer, entered) {
                return Err(Error::AuthenticationFailed {
                    customer: customer.to_string(),
                });
            }
            Local::now().naive_local()
        }
        SaleAuthorization::AdminEntry { entered_at } => *entered_at,
    };

    let quantity = quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    if quantity > product.stock {
        return Err(Error::InsufficientStock {
            requested: quantity,
            available: product.stock,
        });
    }

    let charge = product.price * quantity;
    let description = if quantity > 1 {
        format!("{} (x{quantity})", product.name)
    } else {
        product.name.clone()
    };

    // The ledger insert and the stock write land together or not at all.
    let txn = db.begin().await?;

    let record = sale::ActiveModel {
        customer: Set(customer.to_string()),
        description: Set(description),
        amount: Set(charge),
        display_date: Set(format_sale_timestamp(entered_at)),
        paid: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let record = record.insert(&txn).await?;

    // Absolute value from the caller's snapshot, not a relative decrement:
    // the last writer wins when sessions race on the same product.
    Product::update_many()
        .col_expr(
            product::Column::Stock,
            Expr::value(product.stock - quantity),
        )
        .filter(product::Column::Id.eq(product.id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(record)
}
