use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::auction::AuctionStatus,
    server::{
        error::AppError,
        model::auction::{AuctionItem, CreateAuctionItemParam},
    },
};

pub struct AuctionItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuctionItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an open, active item with no bids.
    pub async fn create(&self, param: CreateAuctionItemParam) -> Result<AuctionItem, AppError> {
        let now = Utc::now();
        let entity = entity::auction_item::ActiveModel {
            name: ActiveValue::Set(param.name),
            lowest_bid: ActiveValue::Set(param.lowest_bid),
            current_bid: ActiveValue::Set(0),
            is_active: ActiveValue::Set(true),
            status: ActiveValue::Set(AuctionStatus::Open.as_str().to_string()),
            image_url: ActiveValue::Set(param.image_url),
            questlog_url: ActiveValue::Set(param.questlog_url),
            ends_at: ActiveValue::Set(param.ends_at),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AuctionItem::from_entity(entity)
    }

    pub async fn find_by_id(&self, item_id: i32) -> Result<Option<AuctionItem>, AppError> {
        entity::prelude::AuctionItem::find_by_id(item_id)
            .one(self.db)
            .await?
            .map(AuctionItem::from_entity)
            .transpose()
    }

    /// Gets items newest first.
    ///
    /// # Arguments
    /// - `active_only` - Only return items still open for bidding
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<AuctionItem>, AppError> {
        let mut query = entity::prelude::AuctionItem::find();
        if active_only {
            query = query.filter(entity::auction_item::Column::IsActive.eq(true));
        }

        query
            .order_by_desc(entity::auction_item::Column::CreatedAt)
            .order_by_desc(entity::auction_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(AuctionItem::from_entity)
            .collect()
    }

    /// Raises `current_bid` to `amount` if the item is open and the amount beats it.
    ///
    /// A single conditional `UPDATE`; of two racing bids only one can match.
    ///
    /// # Returns
    /// - `Ok(true)` - The bid is now the current bid
    /// - `Ok(false)` - The item closed or a higher bid landed first
    pub async fn raise_current_bid(&self, item_id: i32, amount: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::AuctionItem::update_many()
            .col_expr(entity::auction_item::Column::CurrentBid, Expr::value(amount))
            .col_expr(entity::auction_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::auction_item::Column::Id.eq(item_id))
            .filter(entity::auction_item::Column::Status.eq(AuctionStatus::Open.as_str()))
            .filter(entity::auction_item::Column::CurrentBid.lt(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Transitions the item from open to closed and deactivates it.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - The item was already closed (or does not exist)
    pub async fn mark_closed(&self, item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuctionItem::update_many()
            .col_expr(
                entity::auction_item::Column::Status,
                Expr::value(AuctionStatus::Closed.as_str()),
            )
            .col_expr(entity::auction_item::Column::IsActive, Expr::value(false))
            .col_expr(entity::auction_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::auction_item::Column::Id.eq(item_id))
            .filter(entity::auction_item::Column::Status.eq(AuctionStatus::Open.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets ids of open items whose end time is at or before `now`.
    pub async fn get_expired_ids(&self, now: DateTime<Utc>) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AuctionItem::find()
            .select_only()
            .column(entity::auction_item::Column::Id)
            .filter(entity::auction_item::Column::Status.eq(AuctionStatus::Open.as_str()))
            .filter(entity::auction_item::Column::EndsAt.is_not_null())
            .filter(entity::auction_item::Column::EndsAt.lte(now))
            .order_by_asc(entity::auction_item::Column::EndsAt)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
