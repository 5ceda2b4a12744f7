//! Auction data repositories: items, bids and orders.

pub mod bid;
pub mod item;
pub mod order;

pub use bid::AuctionBidRepository;
pub use item::AuctionItemRepository;
pub use order::AuctionOrderRepository;
