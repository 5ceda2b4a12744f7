//! Event catalog: event types and events.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, event_type::EventTypeRepository},
    error::AppError,
    model::event::{CreateEventParam, Event, EventType},
    util::slug::{slugify, unique_slug},
};

/// Slug base used when a title has no letters or digits.
const FALLBACK_SLUG: &str = "event";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all event types ordered by name.
    pub async fn list_event_types(&self) -> Result<Vec<EventType>, AppError> {
        Ok(EventTypeRepository::new(self.db).get_all().await?)
    }

    /// Creates an event with a slug derived from its title.
    ///
    /// The slug is the lowercased title with separators collapsed to `-`; when it is
    /// taken, `-2`, `-3`, … is appended.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with its type
    /// - `Err(AppError::BadRequest)` - Title or description is blank
    /// - `Err(AppError::NotFound)` - The event type does not exist
    pub async fn create_event(&self, mut param: CreateEventParam) -> Result<Event, AppError> {
        param.title = param.title.trim().to_string();
        if param.title.is_empty() {
            return Err(AppError::BadRequest("Event title is required".to_string()));
        }
        if param.description.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Event description is required".to_string(),
            ));
        }

        EventTypeRepository::new(self.db)
            .find_by_id(param.event_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event type {} not found", param.event_type_id))
            })?;

        let event_repo = EventRepository::new(self.db);

        let mut base = slugify(&param.title);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }
        let taken = event_repo.get_slugs_like(&base).await?;
        let slug = unique_slug(&base, &taken);

        let created = event_repo.create(param, slug).await?;
        tracing::info!("Created event {} ({})", created.title, created.slug);

        event_repo
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Event {} vanished", created.id)))
    }

    /// Gets all events newest first, each with its live point value.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn get_event(&self, event_id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))
    }

    pub async fn get_event_by_slug(&self, slug: &str) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", slug)))
    }
}
