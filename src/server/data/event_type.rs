use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::event::EventType;

pub struct EventTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all event types ordered by name.
    pub async fn get_all(&self) -> Result<Vec<EventType>, DbErr> {
        let entities = entity::prelude::EventType::find()
            .order_by_asc(entity::event_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EventType::from_entity).collect())
    }

    pub async fn find_by_id(&self, event_type_id: i32) -> Result<Option<EventType>, DbErr> {
        let entity = entity::prelude::EventType::find_by_id(event_type_id)
            .one(self.db)
            .await?;

        Ok(entity.map(EventType::from_entity))
    }
}
