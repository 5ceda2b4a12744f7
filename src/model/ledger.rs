use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Source of a ledger entry.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Attendance,
    Auction,
}

impl LedgerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attendance => "attendance",
            Self::Auction => "auction",
        }
    }
}

impl FromStr for LedgerKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attendance" => Ok(Self::Attendance),
            "auction" => Ok(Self::Auction),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LedgerEntryDto {
    pub id: i32,
    pub kind: LedgerKind,
    pub event_id: Option<i32>,
    pub auction_order_id: Option<i32>,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BalanceDto {
    pub member_id: i32,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeaderboardEntryDto {
    pub member_id: i32,
    pub server_name: String,
    pub balance: i64,
}
