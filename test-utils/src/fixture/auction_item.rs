//! Auction item fixtures for in-memory models.

use chrono::{TimeZone, Utc};

/// Creates an open auction item model with a reserve of 100 and no bids.
pub fn entity() -> entity::auction_item::Model {
    let timestamp = Utc.with_ymd_and_hms(2025, 6, 10, 18, 0, 0).single().unwrap_or_default();
    entity::auction_item::Model {
        id: 1,
        name: "Sword of Testing".to_string(),
        lowest_bid: 100,
        current_bid: 0,
        is_active: true,
        status: "open".to_string(),
        image_url: None,
        questlog_url: None,
        ends_at: None,
        created_by: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
