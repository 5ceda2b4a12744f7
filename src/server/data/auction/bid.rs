use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{model::auction::AuctionStatus, server::model::auction::AuctionBid};

pub struct AuctionBidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuctionBidRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        item_id: i32,
        member_id: i32,
        amount: i64,
        is_winning: bool,
    ) -> Result<AuctionBid, DbErr> {
        let entity = entity::auction_bid::ActiveModel {
            auction_item_id: ActiveValue::Set(item_id),
            member_id: ActiveValue::Set(member_id),
            bid_amount: ActiveValue::Set(amount),
            is_winning: ActiveValue::Set(is_winning),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuctionBid::from_entity(entity))
    }

    /// Flips every winning bid on the item to non-winning.
    pub async fn clear_winning(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AuctionBid::update_many()
            .col_expr(entity::auction_bid::Column::IsWinning, Expr::value(false))
            .filter(entity::auction_bid::Column::AuctionItemId.eq(item_id))
            .filter(entity::auction_bid::Column::IsWinning.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_winning(&self, item_id: i32) -> Result<Option<AuctionBid>, DbErr> {
        let entity = entity::prelude::AuctionBid::find()
            .filter(entity::auction_bid::Column::AuctionItemId.eq(item_id))
            .filter(entity::auction_bid::Column::IsWinning.eq(true))
            .order_by_desc(entity::auction_bid::Column::BidAmount)
            .one(self.db)
            .await?;

        Ok(entity.map(AuctionBid::from_entity))
    }

    /// Gets the item's bids, highest first.
    pub async fn get_by_item(&self, item_id: i32) -> Result<Vec<AuctionBid>, DbErr> {
        let entities = entity::prelude::AuctionBid::find()
            .filter(entity::auction_bid::Column::AuctionItemId.eq(item_id))
            .order_by_desc(entity::auction_bid::Column::BidAmount)
            .order_by_desc(entity::auction_bid::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AuctionBid::from_entity).collect())
    }

    /// Sums the member's currently winning bids on open items other than `excluding_item_id`.
    ///
    /// These points are committed to auctions the member is leading and cannot back a
    /// new bid.
    pub async fn reserved_by_member(
        &self,
        member_id: i32,
        excluding_item_id: i32,
    ) -> Result<i64, DbErr> {
        let amounts = entity::prelude::AuctionBid::find()
            .select_only()
            .column(entity::auction_bid::Column::BidAmount)
            .join(
                JoinType::InnerJoin,
                entity::auction_bid::Relation::AuctionItem.def(),
            )
            .filter(entity::auction_bid::Column::MemberId.eq(member_id))
            .filter(entity::auction_bid::Column::IsWinning.eq(true))
            .filter(entity::auction_bid::Column::AuctionItemId.ne(excluding_item_id))
            .filter(entity::auction_item::Column::Status.eq(AuctionStatus::Open.as_str()))
            .into_tuple::<i64>()
            .all(self.db)
            .await?;

        Ok(amounts.into_iter().sum())
    }
}
