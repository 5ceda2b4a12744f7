use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventTypeDto {
    pub id: i32,
    pub name: String,
    pub dkp: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub slug: String,
    pub image: Option<String>,
    pub event_type: EventTypeDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub datetime: DateTime<Utc>,
    pub event_type_id: i32,
    pub image: Option<String>,
}
