//! Event catalog domain models.

use chrono::{DateTime, Utc};

use crate::model::event::{CreateEventDto, EventDto, EventTypeDto};

/// Reference data classifying events, carrying the point value of attending one.
#[derive(Debug, Clone, PartialEq)]
pub struct EventType {
    pub id: i32,
    pub name: String,
    pub dkp: i64,
}

impl EventType {
    pub fn from_entity(entity: entity::event_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            dkp: entity.dkp,
        }
    }

    pub fn into_dto(self) -> EventTypeDto {
        EventTypeDto {
            id: self.id,
            name: self.name,
            dkp: self.dkp,
        }
    }
}

/// A scheduled event together with its type.
///
/// The point value is read through `event_type.dkp` at query time and is never
/// stored on the event row.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub slug: String,
    pub image: Option<String>,
    pub event_type: EventType,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, event_type: entity::event_type::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            datetime: entity.datetime,
            slug: entity.slug,
            image: entity.image,
            event_type: EventType::from_entity(event_type),
        }
    }

    pub fn dkp(&self) -> i64 {
        self.event_type.dkp
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            datetime: self.datetime,
            slug: self.slug,
            image: self.image,
            event_type: self.event_type.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub event_type_id: i32,
    pub image: Option<String>,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            datetime: dto.datetime,
            event_type_id: dto.event_type_id,
            image: dto.image,
        }
    }
}
