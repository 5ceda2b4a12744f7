//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests that exercise domain
//! conversions without touching the database. Use `factory` when a row is needed.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//! let admin = fixture::member::entity_builder().role("admin").build();
//! ```

pub mod auction_item;
pub mod member;

pub use member::{entity as member_entity, entity_builder as member_entity_builder};
