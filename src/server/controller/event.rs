use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, EventTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{CreateEventParam, Event, EventType},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Get all event types with their point values.
#[utoipa::path(
    get,
    path = "/api/event-types",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Event types ordered by name", body = Vec<EventTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let event_types: Vec<EventTypeDto> = EventService::new(&state.db)
        .list_event_types()
        .await?
        .into_iter()
        .map(EventType::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(event_types)))
}

/// Get all events, newest first.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events with their current point value", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events: Vec<EventDto> = EventService::new(&state.db)
        .list_events()
        .await?
        .into_iter()
        .map(Event::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Create an event.
///
/// The slug is derived from the title and made unique.
///
/// # Access Control
/// - `Admin` - Only admins can create events
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Blank title or description
/// - `404 Not Found` - Unknown event type
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .create_event(CreateEventParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_event(event_id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/slug/{slug}",
    tag = EVENT_TAG,
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_event_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}
