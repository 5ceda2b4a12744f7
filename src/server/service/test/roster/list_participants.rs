use super::*;

/// Tests filtering the roster by kind.
///
/// Expected: both rows unfiltered, one row per kind when filtered
#[tokio::test]
async fn filters_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let service = RosterService::new(db);

    service
        .sign_up(signup(event.id, first.id, ParticipationKind::Signup))
        .await?;
    service
        .sign_up(signup(event.id, second.id, ParticipationKind::Waitlist))
        .await?;

    assert_eq!(service.list_participants(event.id, None).await?.len(), 2);

    let waitlist = service
        .list_participants(event.id, Some(ParticipationKind::Waitlist))
        .await?;
    assert_eq!(waitlist.len(), 1);
    assert_eq!(waitlist[0].participation.member_id, second.id);
    assert_eq!(waitlist[0].server_name, second.server_name);

    Ok(())
}

/// Tests listing the roster of a missing event.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RosterService::new(db).list_participants(9999, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
