//! Participation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participations.
///
/// Defaults to a `signup` row as `dps` with unknown attendance.
pub struct ParticipationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    member_id: i32,
    kind: String,
    role: Option<String>,
    class: Option<String>,
    attended: Option<bool>,
}

impl<'a> ParticipationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, event_id: i32, member_id: i32) -> Self {
        Self {
            db,
            event_id,
            member_id,
            kind: "signup".to_string(),
            role: Some("dps".to_string()),
            class: None,
            attended: None,
        }
    }

    /// Sets the roster category, `"signup"` or `"waitlist"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }

    pub fn class(mut self, class: Option<String>) -> Self {
        self.class = class;
        self
    }

    /// Sets the stored attendance flag.
    ///
    /// This writes the column directly and does not touch the ledger.
    pub fn attended(mut self, attended: Option<bool>) -> Self {
        self.attended = attended;
        self
    }

    pub async fn build(self) -> Result<entity::participation::Model, DbErr> {
        let now = Utc::now();
        entity::participation::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            member_id: ActiveValue::Set(self.member_id),
            kind: ActiveValue::Set(self.kind),
            role: ActiveValue::Set(self.role),
            class: ActiveValue::Set(self.class),
            attended: ActiveValue::Set(self.attended),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a signup participation with unknown attendance.
pub async fn create_participation(
    db: &DatabaseConnection,
    event_id: i32,
    member_id: i32,
) -> Result<entity::participation::Model, DbErr> {
    ParticipationFactory::new(db, event_id, member_id)
        .build()
        .await
}
