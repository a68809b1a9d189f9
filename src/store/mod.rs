//! Store module: encrypted account persistence.
//!
//! This module provides:
//! - The `Account` record type (`account`)
//! - The high-level `AccountStore` for loading and mutating the
//!   encrypted accounts file (`store`)

pub mod account;
pub mod store;

// Re-export the most commonly used items.
pub use account::Account;
pub use store::AccountStore;
