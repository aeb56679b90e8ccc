//! Integration test utilities for the forum server
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API, plus fixtures that seed the externally-owned rows (users,
//! categories, posts) the forum core only reads.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
