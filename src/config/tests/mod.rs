//! Config module tests
//!
//! - Source loading and user additions
//! - Transaction backup, commit and rollback

#[cfg(test)]
mod transaction_tests;
