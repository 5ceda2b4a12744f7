use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::auction::{AuctionOrder, CreateOrderParam},
};

pub struct AuctionOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuctionOrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the order of a closed item.
    ///
    /// `auction_item_id` is unique, so a second order for the same item fails.
    pub async fn create(&self, param: CreateOrderParam) -> Result<AuctionOrder, AppError> {
        let entity = entity::auction_order::ActiveModel {
            auction_item_id: ActiveValue::Set(param.auction_item_id),
            final_price: ActiveValue::Set(param.final_price),
            winner_id: ActiveValue::Set(param.winner_id),
            winning_bid_id: ActiveValue::Set(param.winning_bid_id),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AuctionOrder::from_entity(entity)
    }

    pub async fn find_by_item(&self, item_id: i32) -> Result<Option<AuctionOrder>, AppError> {
        entity::prelude::AuctionOrder::find()
            .filter(entity::auction_order::Column::AuctionItemId.eq(item_id))
            .one(self.db)
            .await?
            .map(AuctionOrder::from_entity)
            .transpose()
    }
}
