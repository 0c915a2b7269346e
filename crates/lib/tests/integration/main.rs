//! Integration tests for aim-lib.

mod common;
mod lifecycle_tests;
mod store_tests;
