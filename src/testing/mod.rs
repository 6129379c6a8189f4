//! Testing utilities and mock implementations
//!
//! This module provides mock identity and insight providers so the account
//! and reading flows can be tested without hosted backends.

pub mod mocks;

pub use mocks::*;
