//! Ledger entry factory.
//!
//! Inserts rows directly; callers are responsible for keeping the matching
//! participation attended.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an attendance grant for (member, event).
pub async fn create_grant(
    db: &DatabaseConnection,
    member_id: i32,
    event_id: i32,
    amount: i64,
) -> Result<entity::ledger_entry::Model, DbErr> {
    entity::ledger_entry::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        kind: ActiveValue::Set("attendance".to_string()),
        event_id: ActiveValue::Set(Some(event_id)),
        auction_order_id: ActiveValue::Set(None),
        amount: ActiveValue::Set(amount),
        grant_key: ActiveValue::Set(format!("attendance:{}:{}", member_id, event_id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
