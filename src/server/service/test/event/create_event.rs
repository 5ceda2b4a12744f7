use super::*;

/// Tests slug generation for repeated titles.
///
/// Expected: "guild-raid", then "guild-raid-2"
#[tokio::test]
async fn suffixes_taken_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;
    let service = EventService::new(db);

    let first = service.create_event(param("Guild Raid!", event_type.id)).await?;
    let second = service.create_event(param("guild raid", event_type.id)).await?;

    assert_eq!(first.slug, "guild-raid");
    assert_eq!(second.slug, "guild-raid-2");
    assert_eq!(first.event_type.id, event_type.id);
    assert_eq!(
        service.get_event_by_slug("guild-raid-2").await?.id,
        second.id
    );

    Ok(())
}

/// Tests a title with no letters or digits.
///
/// Expected: slug falls back to "event"
#[tokio::test]
async fn symbol_only_title_uses_fallback_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;

    let event = EventService::new(db)
        .create_event(param("!!!", event_type.id))
        .await?;

    assert_eq!(event.slug, "event");

    Ok(())
}

/// Tests blank title and description.
///
/// Expected: Err(AppError::BadRequest) for both, nothing created
#[tokio::test]
async fn rejects_blank_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;
    let service = EventService::new(db);

    let result = service.create_event(param("   ", event_type.id)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut blank_description = param("Siege", event_type.id);
    blank_description.description = String::new();
    let result = service.create_event(blank_description).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert!(service.list_events().await?.is_empty());

    Ok(())
}

/// Tests creating an event for a missing type.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_event_type_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db).create_event(param("Siege", 9999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
