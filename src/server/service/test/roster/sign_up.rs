use super::*;

/// Tests signing up twice for the same kind.
///
/// Expected: the row is updated in place, not duplicated
#[tokio::test]
async fn repeated_sign_up_updates_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let service = RosterService::new(db);

    let first = service
        .sign_up(signup(event.id, member.id, ParticipationKind::Signup))
        .await?;
    let mut changed = signup(event.id, member.id, ParticipationKind::Signup);
    changed.role = Some(CombatRole::Heal);
    let second = service.sign_up(changed).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.role, Some(CombatRole::Heal));
    assert_eq!(second.attended, None);
    assert_eq!(service.list_participants(event.id, None).await?.len(), 1);

    Ok(())
}

/// Tests signing up for a missing event.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;

    let result = RosterService::new(db)
        .sign_up(signup(9999, member.id, ParticipationKind::Signup))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous sign-ups for the same kind on a shared pool.
///
/// Expected: both succeed with the same row and the roster holds one entry
#[tokio::test]
async fn concurrent_sign_ups_share_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .on_disk()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let service = RosterService::new(db);

    let mut healer = signup(event.id, member.id, ParticipationKind::Signup);
    healer.role = Some(CombatRole::Heal);

    let (first, second) = tokio::join!(
        service.sign_up(signup(event.id, member.id, ParticipationKind::Signup)),
        service.sign_up(healer),
    );
    let (first, second) = (first?, second?);

    assert_eq!(first.id, second.id);
    assert_eq!(service.list_participants(event.id, None).await?.len(), 1);

    Ok(())
}
