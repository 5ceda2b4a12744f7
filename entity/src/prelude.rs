pub use super::auction_bid::Entity as AuctionBid;
pub use super::auction_item::Entity as AuctionItem;
pub use super::auction_order::Entity as AuctionOrder;
pub use super::event::Entity as Event;
pub use super::event_type::Entity as EventType;
pub use super::ledger_entry::Entity as LedgerEntry;
pub use super::member::Entity as Member;
pub use super::participation::Entity as Participation;
