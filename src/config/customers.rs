//! Customer roster configuration.
//!
//! The storefront serves a closed, small, trusted group: the roster is a
//! fixed mapping of customer name to 4-digit PIN. A built-in table ships
//! with the crate; dropping a `customers.toml` next to the binary replaces
//! it wholesale. The admin PIN is a single shared secret read from the
//! `ADMIN_PIN` environment variable.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The built-in roster: name and PIN pairs, in display order.
const BUILTIN_CUSTOMERS: [(&str, &str); 8] = [
    ("Juan Medina", "4813"),
    ("Juanita", "3011"),
    ("Juan Sebastián", "3333"),
    ("Juan David", "0015"),
    ("Daya", "1997"),
    ("Yara", "2811"),
    ("Isa", "1206"),
    ("Sara", "5169"),
];

/// A single roster entry
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Customer display name, also the value written into ledger rows
    pub name: String,
    /// 4-digit PIN, compared verbatim
    pub pin: String,
}

/// TOML file structure for a roster override
#[derive(Debug, Deserialize)]
struct RosterFile {
    customers: Vec<Customer>,
}

/// The customer roster, preserving entry order for display and reporting.
#[derive(Debug, Clone)]
pub struct Roster {
    customers: Vec<Customer>,
}

impl Roster {
    /// The compiled-in roster.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            customers: BUILTIN_CUSTOMERS
                .iter()
                .map(|(name, pin)| Customer {
                    name: (*name).to_string(),
                    pin: (*pin).to_string(),
                })
                .collect(),
        }
    }

    /// Customer names in roster order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.customers.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether `name` is a known customer.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.customers.iter().any(|c| c.name == name)
    }

    /// The PIN configured for `name`, if any.
    #[must_use]
    pub fn pin_for(&self, name: &str) -> Option<&str> {
        self.customers
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.pin.as_str())
    }
}

/// Loads a roster from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("failed to read roster file: {e}"),
    })?;

    let parsed: RosterFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("failed to parse roster file: {e}"),
    })?;

    Ok(Roster {
        customers: parsed.customers,
    })
}

/// Loads `customers.toml` when present, otherwise the built-in roster.
///
/// # Errors
/// Returns an error only when the file exists but is unreadable or invalid;
/// a missing file is not an error.
pub fn load_default_roster() -> Result<Roster> {
    let path = Path::new("customers.toml");
    if path.exists() {
        load_roster(path)
    } else {
        Ok(Roster::builtin())
    }
}

/// The admin PIN from the environment, if configured.
///
/// Absence is not validated here; an unset PIN simply means the admin gate
/// never opens.
#[must_use]
pub fn admin_pin() -> Option<String> {
    std::env::var("ADMIN_PIN").ok()
}
