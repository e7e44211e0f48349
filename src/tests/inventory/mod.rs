//! Inventory module tests.

mod format_tests;
