//! Entity module - Contains the SeaORM entity definitions for the two remote
//! tables, `products` and `sales`. Each entity has a Model struct for data
//! and an Entity struct for operations.

pub mod product;
pub mod sale;

// Re-export specific types to avoid conflicts
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use sale::{Column as SaleColumn, Entity as Sale, Model as SaleModel};
