//! Event type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event types.
///
/// Defaults to a unique name and 10 DKP.
pub struct EventTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    dkp: i64,
}

impl<'a> EventTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Event Type {}", id),
            dkp: 10,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dkp(mut self, dkp: i64) -> Self {
        self.dkp = dkp;
        self
    }

    pub async fn build(self) -> Result<entity::event_type::Model, DbErr> {
        let now = Utc::now();
        entity::event_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            dkp: ActiveValue::Set(self.dkp),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event type with default values.
pub async fn create_event_type(
    db: &DatabaseConnection,
) -> Result<entity::event_type::Model, DbErr> {
    EventTypeFactory::new(db).build().await
}
