//! Shared test utilities.
//!
//! Common helpers for setting up an in-memory store and creating rows and
//! fixtures with sensible defaults.

use crate::{
    config::{customers::Roster, store},
    core::catalog::{self, ProductForm},
    entities::{product, sale},
    errors::Result,
};
use chrono::Utc;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory SQLite store with both tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    store::create_tables(&db).await?;
    Ok(db)
}

/// The built-in roster; tests authenticate as its customers.
pub fn test_roster() -> Roster {
    Roster::builtin()
}

/// Creates a product through the admin form path.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: i64,
    stock: i64,
) -> Result<product::Model> {
    catalog::upsert_product(
        db,
        ProductForm {
            id: None,
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Inserts a ledger row directly, bypassing registration, with
/// `created_at` set to now.
pub async fn create_test_sale(
    db: &DatabaseConnection,
    customer: &str,
    description: &str,
    amount: i64,
    paid: bool,
) -> Result<sale::Model> {
    create_dated_sale(db, customer, description, amount, paid, Utc::now()).await
}

/// Inserts a ledger row with a controlled creation timestamp, for
/// date-range and ordering tests.
pub async fn create_dated_sale(
    db: &DatabaseConnection,
    customer: &str,
    description: &str,
    amount: i64,
    paid: bool,
    created_at: DateTimeUtc,
) -> Result<sale::Model> {
    let record = sale::ActiveModel {
        customer: Set(customer.to_string()),
        description: Set(description.to_string()),
        amount: Set(amount),
        display_date: Set(crate::core::sale::format_sale_timestamp(
            created_at.naive_utc(),
        )),
        paid: Set(paid),
        created_at: Set(created_at),
        ..Default::default()
    };
    record.insert(db).await.map_err(Into::into)
}

/// An in-memory product row that never touched a store.
pub fn product_fixture(id: i64, name: &str, price: i64, stock: i64) -> product::Model {
    product::Model {
        id,
        name: name.to_string(),
        price,
        stock,
        emoji: None,
        image: None,
        created_at: Utc::now(),
    }
}

/// An in-memory ledger row that never touched a store.
pub fn sale_fixture(
    id: i64,
    customer: &str,
    description: &str,
    amount: i64,
    paid: bool,
) -> sale::Model {
    dated_sale_fixture_with_description(id, customer, description, amount, paid, Utc::now())
}

/// A ledger fixture with a controlled creation timestamp and a default
/// description.
pub fn dated_sale_fixture(
    id: i64,
    customer: &str,
    amount: i64,
    paid: bool,
    created_at: DateTimeUtc,
) -> sale::Model {
    dated_sale_fixture_with_description(id, customer, "Chocorramo", amount, paid, created_at)
}

fn dated_sale_fixture_with_description(
    id: i64,
    customer: &str,
    description: &str,
    amount: i64,
    paid: bool,
    created_at: DateTimeUtc,
) -> sale::Model {
    sale::Model {
        id,
        customer: customer.to_string(),
        description: description.to_string(),
        amount,
        display_date: crate::core::sale::format_sale_timestamp(created_at.naive_utc()),
        paid,
        created_at,
    }
}
