//! Auction domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::auction::{
        AuctionBidDto, AuctionItemDetailDto, AuctionItemDto, AuctionOrderDto, AuctionStatus,
        CloseAuctionDto, CreateAuctionItemDto, OrderStatus,
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionItem {
    pub id: i32,
    pub name: String,
    /// Reserve price; no bid below it is accepted.
    pub lowest_bid: i64,
    /// Highest accepted bid, 0 when no bid has been placed.
    pub current_bid: i64,
    pub is_active: bool,
    pub status: AuctionStatus,
    pub image_url: Option<String>,
    pub questlog_url: Option<String>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl AuctionItem {
    pub fn from_entity(entity: entity::auction_item::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            lowest_bid: entity.lowest_bid,
            current_bid: entity.current_bid,
            is_active: entity.is_active,
            status: parse_stored("auction_item.status", &entity.status)?,
            image_url: entity.image_url,
            questlog_url: entity.questlog_url,
            ends_at: entity.ends_at,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == AuctionStatus::Open
    }

    /// Smallest bid that would currently be accepted.
    pub fn minimum_bid(&self) -> i64 {
        (self.current_bid + 1).max(self.lowest_bid)
    }

    pub fn into_dto(self) -> AuctionItemDto {
        AuctionItemDto {
            id: self.id,
            name: self.name,
            lowest_bid: self.lowest_bid,
            current_bid: self.current_bid,
            is_active: self.is_active,
            status: self.status,
            image_url: self.image_url,
            questlog_url: self.questlog_url,
            ends_at: self.ends_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionBid {
    pub id: i32,
    pub auction_item_id: i32,
    pub member_id: i32,
    pub bid_amount: i64,
    pub is_winning: bool,
    pub created_at: DateTime<Utc>,
}

impl AuctionBid {
    pub fn from_entity(entity: entity::auction_bid::Model) -> Self {
        Self {
            id: entity.id,
            auction_item_id: entity.auction_item_id,
            member_id: entity.member_id,
            bid_amount: entity.bid_amount,
            is_winning: entity.is_winning,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuctionBidDto {
        AuctionBidDto {
            id: self.id,
            member_id: self.member_id,
            bid_amount: self.bid_amount,
            is_winning: self.is_winning,
            created_at: self.created_at,
        }
    }
}

/// Binding record created exactly once when an item closes.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionOrder {
    pub id: i32,
    pub auction_item_id: i32,
    pub final_price: i64,
    pub winner_id: Option<i32>,
    pub winning_bid_id: Option<i32>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl AuctionOrder {
    pub fn from_entity(entity: entity::auction_order::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            auction_item_id: entity.auction_item_id,
            final_price: entity.final_price,
            winner_id: entity.winner_id,
            winning_bid_id: entity.winning_bid_id,
            status: parse_stored("auction_order.status", &entity.status)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AuctionOrderDto {
        AuctionOrderDto {
            id: self.id,
            auction_item_id: self.auction_item_id,
            final_price: self.final_price,
            winner_id: self.winner_id,
            winning_bid_id: self.winning_bid_id,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// An item with its bid history (highest first) and its order once closed.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionItemDetail {
    pub item: AuctionItem,
    pub bids: Vec<AuctionBid>,
    pub order: Option<AuctionOrder>,
}

impl AuctionItemDetail {
    pub fn into_dto(self) -> AuctionItemDetailDto {
        AuctionItemDetailDto {
            item: self.item.into_dto(),
            bids: self.bids.into_iter().map(AuctionBid::into_dto).collect(),
            order: self.order.map(AuctionOrder::into_dto),
        }
    }
}

/// Result of closing an auction.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseOutcome {
    pub order: AuctionOrder,
    /// True when another caller had already closed the item; nothing was written.
    pub already_closed: bool,
}

impl CloseOutcome {
    pub fn into_dto(self) -> CloseAuctionDto {
        CloseAuctionDto {
            order: self.order.into_dto(),
            already_closed: self.already_closed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuctionItemParam {
    pub name: String,
    pub lowest_bid: i64,
    pub image_url: Option<String>,
    pub questlog_url: Option<String>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
}

impl CreateAuctionItemParam {
    pub fn from_dto(dto: CreateAuctionItemDto, created_by: i32) -> Self {
        Self {
            name: dto.name,
            lowest_bid: dto.lowest_bid,
            image_url: dto.image_url,
            questlog_url: dto.questlog_url,
            ends_at: dto.ends_at,
            created_by: Some(created_by),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub auction_item_id: i32,
    pub final_price: i64,
    pub winner_id: Option<i32>,
    pub winning_bid_id: Option<i32>,
    pub status: OrderStatus,
}
