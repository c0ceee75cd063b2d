//! `SnackTab` - a running-tab storefront core for a small trusted group
//!
//! This crate is the logic layer of a snack storefront: a product catalog
//! with stock counts, a ledger of purchases charged to named customers'
//! tabs, PIN-gated purchase confirmation, and admin operations for
//! inventory, debt filtering, and settlement. All state lives in a remote
//! table store; views work from an in-memory snapshot refetched after
//! every mutation.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::inconsistent_struct_constructor,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration - remote store settings and the customer roster
pub mod config;
/// Core business logic - catalog, sales, ledger, identity, and reporting
pub mod core;
/// SeaORM entity definitions for the remote tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Application state - the snapshot of both tables and its refresh
pub mod state;

#[cfg(test)]
pub mod test_utils;
