//! Unit tests for the board context.

mod filter_tests;
mod session_tests;
