use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Open,
    Closed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for AuctionStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(other.to_string()),
        }
    }
}

/// Outcome recorded when an auction closes.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Settled,
    Unsold,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settled => "settled",
            Self::Unsold => "unsold",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "settled" => Ok(Self::Settled),
            "unsold" => Ok(Self::Unsold),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuctionItemDto {
    pub id: i32,
    pub name: String,
    pub lowest_bid: i64,
    pub current_bid: i64,
    pub is_active: bool,
    pub status: AuctionStatus,
    pub image_url: Option<String>,
    pub questlog_url: Option<String>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuctionBidDto {
    pub id: i32,
    pub member_id: i32,
    pub bid_amount: i64,
    pub is_winning: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuctionItemDetailDto {
    pub item: AuctionItemDto,
    pub bids: Vec<AuctionBidDto>,
    pub order: Option<AuctionOrderDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAuctionItemDto {
    pub name: String,
    pub lowest_bid: i64,
    pub image_url: Option<String>,
    pub questlog_url: Option<String>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlaceBidDto {
    pub amount: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuctionOrderDto {
    pub id: i32,
    pub auction_item_id: i32,
    pub final_price: i64,
    pub winner_id: Option<i32>,
    pub winning_bid_id: Option<i32>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CloseAuctionDto {
    pub order: AuctionOrderDto,
    pub already_closed: bool,
}
