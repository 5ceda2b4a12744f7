//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows into the database; see `fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::create_member(&db).await?;
//! let (event_type, event) = factory::helpers::create_event_with_type(&db, 10).await?;
//! let participation = factory::create_participation(&db, event.id, member.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::member::MemberFactory::new(&db)
//!     .discord_id("987654321")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let item = factory::auction_item::AuctionItemFactory::new(&db)
//!     .lowest_bid(100)
//!     .build()
//!     .await?;
//! ```

pub mod auction_bid;
pub mod auction_item;
pub mod event;
pub mod event_type;
pub mod helpers;
pub mod ledger_entry;
pub mod member;
pub mod participation;

pub use auction_bid::create_bid;
pub use auction_item::create_auction_item;
pub use event::create_event;
pub use event_type::create_event_type;
pub use ledger_entry::create_grant;
pub use member::create_member;
pub use participation::create_participation;
