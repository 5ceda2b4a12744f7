//! Auction bid factory.
//!
//! Inserts the bid row only; the item's `current_bid` is left untouched.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a bid on an item.
pub async fn create_bid(
    db: &DatabaseConnection,
    auction_item_id: i32,
    member_id: i32,
    bid_amount: i64,
    is_winning: bool,
) -> Result<entity::auction_bid::Model, DbErr> {
    entity::auction_bid::ActiveModel {
        auction_item_id: ActiveValue::Set(auction_item_id),
        member_id: ActiveValue::Set(member_id),
        bid_amount: ActiveValue::Set(bid_amount),
        is_winning: ActiveValue::Set(is_winning),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
