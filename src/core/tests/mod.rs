//! Core module tests
//!
//! Contains test suites for core functionality:
//! - BindingSet lookup and add-gate tests
//! - Parser tests (line classification, declarations, full sources)
//! - Cross-set conflict tests

#[cfg(test)]
mod binding_set_tests;
