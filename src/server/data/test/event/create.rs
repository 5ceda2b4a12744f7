use super::*;

/// Tests inserting an event with a chosen slug.
///
/// Expected: Ok with slug stored and event retrievable by it
#[tokio::test]
async fn creates_event_with_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;
    let repo = EventRepository::new(db);

    let created = repo
        .create(
            CreateEventParam {
                title: "Raid Night".to_string(),
                description: "Bring potions".to_string(),
                datetime: Utc::now(),
                event_type_id: event_type.id,
                image: None,
            },
            "raid-night".to_string(),
        )
        .await?;

    let found = repo.find_by_slug("raid-night").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.event_type.id, event_type.id);

    Ok(())
}

/// Tests collecting slugs that share a base.
///
/// Expected: the base and its numbered variants, not unrelated slugs
#[tokio::test]
async fn collects_slugs_sharing_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let event_type = factory::create_event_type(db).await?;

    for slug in ["raid", "raid-2", "dungeon"] {
        factory::event::EventFactory::new(db, event_type.id)
            .slug(slug)
            .build()
            .await?;
    }

    let mut slugs = EventRepository::new(db).get_slugs_like("raid").await?;
    slugs.sort();

    assert_eq!(slugs, vec!["raid".to_string(), "raid-2".to_string()]);

    Ok(())
}
