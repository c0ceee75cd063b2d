//! Catalog business logic - product fetch, upsert, hard delete, and search.
//!
//! The admin form submits price and stock as text; parsing is strict, so
//! non-numeric or negative input is rejected with a validation error rather
//! than silently coerced. Create and update share one entry point and are
//! distinguished solely by the presence of an id in the form. Updates never
//! touch the id or the creation timestamp. Deletion is hard: no tombstone,
//! and no referential check against ledger rows, which keep the product's
//! name as plain text.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{ModelTrait, QueryOrder, Set, prelude::*};

/// Admin product form, as submitted: numeric fields arrive as text.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// Present for updates, absent for creates
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Unit price, raw text
    pub price: String,
    /// Stock count, raw text
    pub stock: String,
    /// Emoji glyph; empty means none
    pub emoji: String,
    /// Image URL; empty means none
    pub image: String,
}

/// Retrieves the full catalog, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the store query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its store-assigned id.
///
/// # Errors
/// Returns an error if the store query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Parses a numeric form field strictly: integer, non-negative.
fn parse_numeric_field(field: &'static str, raw: &str) -> Result<i64> {
    let parsed = raw.trim().parse::<i64>().map_err(|_| Error::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;

    if parsed < 0 {
        return Err(Error::InvalidNumber {
            field,
            value: raw.to_string(),
        });
    }

    Ok(parsed)
}

fn optional_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Creates or updates a product from the admin form.
///
/// A form with an id updates that product in place; without one it creates
/// a new row. The id and creation timestamp are never written on update.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - Price or stock are non-numeric or negative
/// - The id refers to no existing product
/// - The store write fails
pub async fn upsert_product(db: &DatabaseConnection, form: ProductForm) -> Result<product::Model> {
    if form.name.trim().is_empty() {
        return Err(Error::Config {
            message: "product name cannot be empty".to_string(),
        });
    }

    let price = parse_numeric_field("precio", &form.price)?;
    let stock = parse_numeric_field("stock", &form.stock)?;
    let emoji = optional_text(form.emoji);
    let image = optional_text(form.image);

    match form.id {
        Some(id) => {
            let mut existing: product::ActiveModel = Product::find_by_id(id)
                .one(db)
                .await?
                .ok_or(Error::ProductNotFound { id })?
                .into();

            existing.name = Set(form.name.trim().to_string());
            existing.price = Set(price);
            existing.stock = Set(stock);
            existing.emoji = Set(emoji);
            existing.image = Set(image);

            existing.update(db).await.map_err(Into::into)
        }
        None => {
            let fresh = product::ActiveModel {
                name: Set(form.name.trim().to_string()),
                price: Set(price),
                stock: Set(stock),
                emoji: Set(emoji),
                image: Set(image),
                created_at: Set(chrono::Utc::now()),
                ..Default::default()
            };
            fresh.insert(db).await.map_err(Into::into)
        }
    }
}

/// Hard-deletes a product. Historical ledger rows are untouched; their
/// description text simply stops matching any catalog entry.
///
/// # Errors
/// Returns an error if the product does not exist or the delete fails.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    product.delete(db).await?;
    Ok(())
}

/// Case-insensitive name search over an in-memory catalog snapshot.
/// An empty query matches everything.
#[must_use]
pub fn search_products<'a>(products: &'a [product::Model], query: &str) -> Vec<&'a product::Model> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}
