//! Ledger domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::ledger::{LeaderboardEntryDto, LedgerEntryDto, LedgerKind},
    server::{error::AppError, util::parse::parse_stored},
};

/// A signed point movement on a member's ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i32,
    pub member_id: i32,
    pub kind: LedgerKind,
    pub event_id: Option<i32>,
    pub auction_order_id: Option<i32>,
    /// Positive for attendance grants, negative for auction debits.
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn from_entity(entity: entity::ledger_entry::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            kind: parse_stored("ledger_entry.kind", &entity.kind)?,
            event_id: entity.event_id,
            auction_order_id: entity.auction_order_id,
            amount: entity.amount,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> LedgerEntryDto {
        LedgerEntryDto {
            id: self.id,
            kind: self.kind,
            event_id: self.event_id,
            auction_order_id: self.auction_order_id,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// Unique key of the attendance grant for (member, event).
pub fn attendance_grant_key(member_id: i32, event_id: i32) -> String {
    format!("attendance:{}:{}", member_id, event_id)
}

/// Unique key of the debit for an auction order.
pub fn auction_grant_key(order_id: i32) -> String {
    format!("auction:{}", order_id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub member_id: i32,
    pub server_name: String,
    pub balance: i64,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            member_id: self.member_id,
            server_name: self.server_name,
            balance: self.balance,
        }
    }
}
