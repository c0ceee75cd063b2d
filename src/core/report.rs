//! Tab report generation.
//!
//! Produces structured data only; formatting belongs to callers. Besides
//! the per-customer outstanding totals, the report surfaces the two ways
//! the stores can drift apart: ledger rows whose product description no
//! longer resolves to any catalog name (history outliving a deleted or
//! renamed product), and products whose stock has gone negative (the trace
//! a lost stock write leaves behind).

use crate::config::customers::Roster;
use crate::entities::{product, sale};
use crate::state::Snapshot;
use std::collections::HashSet;

/// One customer's outstanding balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDebt {
    /// Customer name, as on the roster
    pub name: String,
    /// Sum of unpaid charges
    pub outstanding: i64,
}

/// A point-in-time view of every tab plus reconciliation findings.
#[derive(Debug, Clone)]
pub struct TabReport {
    /// Outstanding balance per roster customer, in roster order,
    /// zero balances included
    pub per_customer: Vec<CustomerDebt>,
    /// Outstanding balance over the whole ledger, roster or not
    pub total_outstanding: i64,
    /// Ledger rows whose description matches no catalog product name
    pub orphaned_sales: Vec<sale::Model>,
    /// Products whose stock count has gone below zero
    pub negative_stock: Vec<product::Model>,
}

/// Strips the quantity suffix from a ledger description, recovering the
/// product name that was snapshotted at sale time: `"Chocorramo (x2)"`
/// becomes `"Chocorramo"`. Descriptions without a suffix pass through.
#[must_use]
pub fn base_description(description: &str) -> &str {
    if description.ends_with(')') {
        if let Some(start) = description.rfind(" (x") {
            let digits = &description[start + 3..description.len() - 1];
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return &description[..start];
            }
        }
    }
    description
}

/// Builds the tab report from the current snapshot.
///
/// Per-customer totals use exact name equality, like the catalog view's
/// own-debt display; substring matching belongs to the admin filter only.
#[must_use]
pub fn tab_report(snapshot: &Snapshot, roster: &Roster) -> TabReport {
    let per_customer = roster
        .names()
        .iter()
        .map(|name| CustomerDebt {
            name: (*name).to_string(),
            outstanding: snapshot
                .sales
                .iter()
                .filter(|s| !s.paid && s.customer == *name)
                .map(|s| s.amount)
                .sum(),
        })
        .collect();

    let total_outstanding = snapshot
        .sales
        .iter()
        .filter(|s| !s.paid)
        .map(|s| s.amount)
        .sum();

    let catalog_names: HashSet<&str> =
        snapshot.products.iter().map(|p| p.name.as_str()).collect();
    let orphaned_sales = snapshot
        .sales
        .iter()
        .filter(|s| !catalog_names.contains(base_description(&s.description)))
        .cloned()
        .collect();

    let negative_stock = snapshot
        .products
        .iter()
        .filter(|p| p.stock < 0)
        .cloned()
        .collect();

    TabReport {
        per_customer,
        total_outstanding,
        orphaned_sales,
        negative_stock,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_base_description() {
        assert_eq!(base_description("Chocorramo"), "Chocorramo");
        assert_eq!(base_description("Chocorramo (x2)"), "Chocorramo");
        assert_eq!(base_description("Caja de bombones (x12)"), "Caja de bombones");
        // Not a quantity suffix
        assert_eq!(base_description("Snack (xl)"), "Snack (xl)");
        assert_eq!(base_description("Snack (x)"), "Snack (x)");
    }

    #[test]
    fn per_customer_totals_use_exact_names() {
        let snapshot = Snapshot {
            products: vec![product_fixture(1, "Chocorramo", 2000, 3)],
            sales: vec![
                sale_fixture(1, "Juan Medina", "Chocorramo", 2000, false),
                sale_fixture(2, "Juanita", "Chocorramo", 2000, false),
            ],
        };

        let report = tab_report(&snapshot, &test_roster());
        let juan = report
            .per_customer
            .iter()
            .find(|d| d.name == "Juan Medina")
            .unwrap();
        let juanita = report
            .per_customer
            .iter()
            .find(|d| d.name == "Juanita")
            .unwrap();

        // "Juan Medina" must not absorb "Juanita" rows, or vice versa
        assert_eq!(juan.outstanding, 2000);
        assert_eq!(juanita.outstanding, 2000);
    }

    #[test]
    fn report_totals_and_zero_balances() {
        let snapshot = Snapshot {
            products: vec![product_fixture(1, "Chocorramo", 2000, 3)],
            sales: vec![
                sale_fixture(1, "Daya", "Chocorramo (x2)", 4000, false),
                sale_fixture(2, "Daya", "Chocorramo", 2000, true),
            ],
        };

        let roster = test_roster();
        let report = tab_report(&snapshot, &roster);

        // Every roster customer appears, even with nothing pending
        assert_eq!(report.per_customer.len(), roster.names().len());
        let daya = report
            .per_customer
            .iter()
            .find(|d| d.name == "Daya")
            .unwrap();
        assert_eq!(daya.outstanding, 4000);
        let sara = report
            .per_customer
            .iter()
            .find(|d| d.name == "Sara")
            .unwrap();
        assert_eq!(sara.outstanding, 0);

        assert_eq!(report.total_outstanding, 4000);
        assert!(report.orphaned_sales.is_empty());
        assert!(report.negative_stock.is_empty());
    }

    #[test]
    fn orphaned_sales_are_detected_through_the_quantity_suffix() {
        let snapshot = Snapshot {
            products: vec![product_fixture(1, "Manimoto", 1500, 5)],
            sales: vec![
                // Product since deleted from the catalog
                sale_fixture(1, "Daya", "Chocorramo (x2)", 4000, false),
                // Still resolvable despite the suffix
                sale_fixture(2, "Sara", "Manimoto (x3)", 4500, false),
            ],
        };

        let report = tab_report(&snapshot, &test_roster());
        assert_eq!(report.orphaned_sales.len(), 1);
        assert_eq!(report.orphaned_sales[0].description, "Chocorramo (x2)");
    }

    #[test]
    fn negative_stock_is_reported() {
        let snapshot = Snapshot {
            products: vec![
                product_fixture(1, "Chocorramo", 2000, 3),
                product_fixture(2, "Gomitas", 1200, -2),
            ],
            sales: Vec::new(),
        };

        let report = tab_report(&snapshot, &test_roster());
        assert_eq!(report.negative_stock.len(), 1);
        assert_eq!(report.negative_stock[0].name, "Gomitas");
    }

    #[test]
    fn off_roster_sales_count_toward_the_grand_total_only() {
        let snapshot = Snapshot {
            products: vec![product_fixture(1, "Chocorramo", 2000, 3)],
            sales: vec![sale_fixture(1, "Visitante", "Chocorramo", 2000, false)],
        };

        let report = tab_report(&snapshot, &test_roster());
        assert_eq!(report.total_outstanding, 2000);
        assert!(report.per_customer.iter().all(|d| d.outstanding == 0));
    }
}
