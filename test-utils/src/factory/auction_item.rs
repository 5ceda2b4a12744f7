//! Auction item factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test auction items.
///
/// Defaults to an open, active item with a reserve of 100, no bids and no end time.
pub struct AuctionItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    lowest_bid: i64,
    current_bid: i64,
    status: String,
    is_active: bool,
    ends_at: Option<DateTime<Utc>>,
    created_by: Option<i32>,
}

impl<'a> AuctionItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            lowest_bid: 100,
            current_bid: 0,
            status: "open".to_string(),
            is_active: true,
            ends_at: None,
            created_by: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn lowest_bid(mut self, lowest_bid: i64) -> Self {
        self.lowest_bid = lowest_bid;
        self
    }

    pub fn current_bid(mut self, current_bid: i64) -> Self {
        self.current_bid = current_bid;
        self
    }

    /// Marks the item closed and inactive.
    pub fn closed(mut self) -> Self {
        self.status = "closed".to_string();
        self.is_active = false;
        self
    }

    pub fn ends_at(mut self, ends_at: Option<DateTime<Utc>>) -> Self {
        self.ends_at = ends_at;
        self
    }

    pub fn created_by(mut self, member_id: Option<i32>) -> Self {
        self.created_by = member_id;
        self
    }

    pub async fn build(self) -> Result<entity::auction_item::Model, DbErr> {
        let now = Utc::now();
        entity::auction_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            lowest_bid: ActiveValue::Set(self.lowest_bid),
            current_bid: ActiveValue::Set(self.current_bid),
            is_active: ActiveValue::Set(self.is_active),
            status: ActiveValue::Set(self.status),
            image_url: ActiveValue::Set(None),
            questlog_url: ActiveValue::Set(None),
            ends_at: ActiveValue::Set(self.ends_at),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open auction item with a reserve of 100.
pub async fn create_auction_item(
    db: &DatabaseConnection,
) -> Result<entity::auction_item::Model, DbErr> {
    AuctionItemFactory::new(db).build().await
}
