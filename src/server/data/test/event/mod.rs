use crate::server::{
    data::{event::EventRepository, event_type::EventTypeRepository},
    model::event::CreateEventParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod get_all;
