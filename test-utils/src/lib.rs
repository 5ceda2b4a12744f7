//! Guildhall Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildhall
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories that insert rows with sensible defaults
//! - **fixture**: In-memory entity models that are never inserted
//! - **serenity**: Discord API objects built from JSON, as Discord would send them
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_balance() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_ledger_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let member = factory::member::create_member(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
