use super::*;

/// Tests listing events newest first.
///
/// Expected: later event listed before earlier one
#[tokio::test]
async fn lists_events_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;

    let earlier = factory::event::EventFactory::new(db, event_type.id)
        .datetime(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let later = factory::event::EventFactory::new(db, event_type.id)
        .datetime(Utc::now() + Duration::days(2))
        .build()
        .await?;

    let events = EventRepository::new(db).get_all().await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, later.id);
    assert_eq!(events[1].id, earlier.id);

    Ok(())
}

/// Tests listing event types ordered by name.
///
/// Expected: alphabetical order
#[tokio::test]
async fn lists_event_types_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event_type::EventTypeFactory::new(db).name("Raid").build().await?;
    factory::event_type::EventTypeFactory::new(db).name("Dungeon").build().await?;

    let names: Vec<String> = EventTypeRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|event_type| event_type.name)
        .collect();

    assert_eq!(names, vec!["Dungeon".to_string(), "Raid".to_string()]);

    Ok(())
}
