//! Test utilities for unit and route testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository and resolver implementations for mocking I/O
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
