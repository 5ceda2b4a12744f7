use chrono::Utc;

use crate::server::{
    error::AppError, model::event::CreateEventParam, service::event::EventService,
};
use test_utils::{builder::TestBuilder, factory};

mod create_event;

fn param(title: &str, event_type_id: i32) -> CreateEventParam {
    CreateEventParam {
        title: title.to_string(),
        description: "Bring potions".to_string(),
        datetime: Utc::now(),
        event_type_id,
        image: None,
    }
}
