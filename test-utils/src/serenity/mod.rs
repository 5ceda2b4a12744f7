//! Test factories for creating Serenity API objects.
//!
//! These build valid Serenity structs by deserializing JSON shaped like Discord's
//! API responses, so code that consumes them is tested against real decoding.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_user;
//!
//! let user = create_test_user(123456789, "tester", Some("Tester"));
//! ```

pub mod user;

pub use user::create_test_user;
