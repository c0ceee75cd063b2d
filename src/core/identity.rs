//! Identity gate - PIN comparison for purchase confirmation and admin access.
//!
//! PINs here are a social deterrent for a closed, trusted group, not a
//! security boundary: plain equality against the roster, no hashing, no
//! rate limiting, no lockout. Treating this gate as real authentication
//! would require an explicit redesign.

use crate::config::customers::{self, Roster};

/// Compares an expected PIN (if one is configured) with the entered value.
#[must_use]
pub fn verify_pin(expected: Option<&str>, entered: &str) -> bool {
    expected.is_some_and(|pin| pin == entered)
}

/// Checks a customer's entered PIN against the roster.
///
/// Unknown customers always fail: there is no PIN to match.
#[must_use]
pub fn check_customer_pin(roster: &Roster, name: &str, entered: &str) -> bool {
    verify_pin(roster.pin_for(name), entered)
}

/// Checks the entered PIN against the configured admin secret.
///
/// When no admin PIN is configured the gate simply never opens.
#[must_use]
pub fn check_admin_pin(entered: &str) -> bool {
    verify_pin(customers::admin_pin().as_deref(), entered)
}
