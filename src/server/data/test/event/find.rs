use super::*;

/// Tests that an event's point value comes from its type.
///
/// Changing the type's dkp after the event exists is reflected immediately.
///
/// Expected: dkp equals the event type's current value
#[tokio::test]
async fn resolves_dkp_through_event_type() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (event_type, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let repo = EventRepository::new(db);

    assert_eq!(repo.find_by_id(event.id).await?.unwrap().dkp(), 10);

    entity::event_type::ActiveModel {
        id: ActiveValue::Unchanged(event_type.id),
        dkp: ActiveValue::Set(25),
        ..Default::default()
    }
    .update(db)
    .await?;

    assert_eq!(repo.find_by_id(event.id).await?.unwrap().dkp(), 25);

    Ok(())
}

/// Tests looking up a missing event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = EventRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_slug("nope").await?.is_none());
    assert!(!repo.exists(999).await?);

    Ok(())
}
