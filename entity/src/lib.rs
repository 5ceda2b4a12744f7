//! SeaORM entity models for the guildhall schema.
//!
//! Each module mirrors one table created by the `migration` crate. Enumerated columns
//! (roles, statuses, kinds) are stored as plain strings and parsed into domain enums
//! at the repository boundary.

pub mod prelude;

pub mod auction_bid;
pub mod auction_item;
pub mod auction_order;
pub mod event;
pub mod event_type;
pub mod ledger_entry;
pub mod member;
pub mod participation;
