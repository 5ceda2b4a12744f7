//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// Defaults:
/// - title: `"Event {id}"`, slug `"event-{id}"`
/// - datetime: one day from now
/// - description: `"Test event description"`
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    event_type_id: i32,
    title: String,
    slug: String,
    description: String,
    datetime: DateTime<Utc>,
    image: Option<String>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, event_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_type_id,
            title: format!("Event {}", id),
            slug: format!("event-{}", id),
            description: "Test event description".to_string(),
            datetime: Utc::now() + Duration::days(1),
            image: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            datetime: ActiveValue::Set(self.datetime),
            image: ActiveValue::Set(self.image),
            slug: ActiveValue::Set(self.slug),
            event_type_id: ActiveValue::Set(self.event_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event of the given type with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    event_type_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, event_type_id).build().await
}
