//! Ledger data repository.
//!
//! Every entry carries a unique `grant_key`, so the store itself refuses a second
//! attendance grant for (member, event) and a second debit for an order.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::ledger::LedgerKind,
    server::{
        error::AppError,
        model::ledger::{attendance_grant_key, auction_grant_key, LedgerEntry},
    },
};

pub struct LedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the attendance grant for (member, event) unless it already exists.
    ///
    /// Uses `ON CONFLICT (grant_key) DO NOTHING`, so repeating the call never
    /// double-grants and never changes the amount of an existing grant.
    ///
    /// # Returns
    /// - `Ok(true)` - A new entry was inserted
    /// - `Ok(false)` - The grant already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn grant_attendance(
        &self,
        member_id: i32,
        event_id: i32,
        amount: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::LedgerEntry::insert(entity::ledger_entry::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            kind: ActiveValue::Set(LedgerKind::Attendance.as_str().to_string()),
            event_id: ActiveValue::Set(Some(event_id)),
            auction_order_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(amount),
            grant_key: ActiveValue::Set(attendance_grant_key(member_id, event_id)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::ledger_entry::Column::GrantKey)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Deletes the attendance grant for (member, event).
    ///
    /// # Returns
    /// - `Ok(true)` - The grant existed and was removed
    /// - `Ok(false)` - There was no grant
    pub async fn revoke_attendance(&self, member_id: i32, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LedgerEntry::delete_many()
            .filter(
                entity::ledger_entry::Column::GrantKey.eq(attendance_grant_key(member_id, event_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Inserts the debit of a settled auction order.
    ///
    /// # Arguments
    /// - `member_id` - Winner of the auction
    /// - `order_id` - The settled order
    /// - `price` - Final price, stored as a negative amount
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - The inserted debit
    /// - `Err(AppError::DbErr)` - Insert failed, including a second debit for the order
    pub async fn debit_auction(
        &self,
        member_id: i32,
        order_id: i32,
        price: i64,
    ) -> Result<LedgerEntry, AppError> {
        let entity = entity::ledger_entry::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            kind: ActiveValue::Set(LedgerKind::Auction.as_str().to_string()),
            event_id: ActiveValue::Set(None),
            auction_order_id: ActiveValue::Set(Some(order_id)),
            amount: ActiveValue::Set(-price),
            grant_key: ActiveValue::Set(auction_grant_key(order_id)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LedgerEntry::from_entity(entity)
    }

    /// Finds the attendance grant for (member, event).
    pub async fn find_attendance(
        &self,
        member_id: i32,
        event_id: i32,
    ) -> Result<Option<LedgerEntry>, AppError> {
        entity::prelude::LedgerEntry::find()
            .filter(
                entity::ledger_entry::Column::GrantKey.eq(attendance_grant_key(member_id, event_id)),
            )
            .one(self.db)
            .await?
            .map(LedgerEntry::from_entity)
            .transpose()
    }

    /// Sums the member's entries.
    ///
    /// # Returns
    /// - `Ok(i64)` - Balance; 0 for a member with no entries
    pub async fn balance(&self, member_id: i32) -> Result<i64, DbErr> {
        let amounts = entity::prelude::LedgerEntry::find()
            .select_only()
            .column(entity::ledger_entry::Column::Amount)
            .filter(entity::ledger_entry::Column::MemberId.eq(member_id))
            .into_tuple::<i64>()
            .all(self.db)
            .await?;

        Ok(amounts.into_iter().sum())
    }

    /// Gets `(member_id, amount)` for every entry in the ledger.
    pub async fn get_all_amounts(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::LedgerEntry::find()
            .select_only()
            .column(entity::ledger_entry::Column::MemberId)
            .column(entity::ledger_entry::Column::Amount)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Gets the member's entries, newest first.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<LedgerEntry>, AppError> {
        entity::prelude::LedgerEntry::find()
            .filter(entity::ledger_entry::Column::MemberId.eq(member_id))
            .order_by_desc(entity::ledger_entry::Column::CreatedAt)
            .order_by_desc(entity::ledger_entry::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LedgerEntry::from_entity)
            .collect()
    }
}
