//! Event data repository.
//!
//! Events are always read together with their event type so the point value comes
//! from the join rather than a copy on the event row.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::event::{CreateEventParam, Event};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event with an already chosen slug.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - The inserted row
    /// - `Err(DbErr)` - Insert failed, including a slug collision on the unique index
    pub async fn create(
        &self,
        param: CreateEventParam,
        slug: String,
    ) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            datetime: ActiveValue::Set(param.datetime),
            image: ActiveValue::Set(param.image),
            slug: ActiveValue::Set(slug),
            event_type_id: ActiveValue::Set(param.event_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets slugs equal to `base` or starting with `base-`.
    pub async fn get_slugs_like(&self, base: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Event::find()
            .select_only()
            .column(entity::event::Column::Slug)
            .filter(
                entity::event::Column::Slug
                    .eq(base)
                    .or(entity::event::Column::Slug.starts_with(format!("{}-", base))),
            )
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Gets all events with their types, newest first.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let rows = entity::prelude::Event::find()
            .find_also_related(entity::prelude::EventType)
            .order_by_desc(entity::event::Column::Datetime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(event, event_type)| {
                event_type.map(|event_type| Event::from_entity(event, event_type))
            })
            .collect())
    }

    /// Finds an event with its type by id.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event and its type found
    /// - `Ok(None)` - No event with that id, or its type is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, event_id: i32) -> Result<Option<Event>, DbErr> {
        let row = entity::prelude::Event::find_by_id(event_id)
            .find_also_related(entity::prelude::EventType)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(event, event_type)| {
            event_type.map(|event_type| Event::from_entity(event, event_type))
        }))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, DbErr> {
        let row = entity::prelude::Event::find()
            .filter(entity::event::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::EventType)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(event, event_type)| {
            event_type.map(|event_type| Event::from_entity(event, event_type))
        }))
    }

    pub async fn exists(&self, event_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?
            .is_some())
    }
}
