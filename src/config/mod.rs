/// Customer roster and admin PIN configuration
pub mod customers;

/// Remote table store configuration and connection management
pub mod store;
