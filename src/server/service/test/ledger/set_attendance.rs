use super::*;

/// Tests toggling attendance on a 10 point raid.
///
/// Expected: balance 10 after true, still 10 after a repeated true, 0 after false
#[tokio::test]
async fn attendance_toggle_tracks_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let service = LedgerService::new(db);

    let entry = service.set_attendance(event.id, member.id, Some(true)).await?;
    assert_eq!(entry.map(|e| e.amount), Some(10));
    assert_eq!(service.balance(member.id).await?, 10);

    service.set_attendance(event.id, member.id, Some(true)).await?;
    assert_eq!(service.balance(member.id).await?, 10);
    assert_eq!(service.entries(member.id).await?.len(), 1);

    let entry = service.set_attendance(event.id, member.id, Some(false)).await?;
    assert!(entry.is_none());
    assert_eq!(service.balance(member.id).await?, 0);

    Ok(())
}

/// Tests clearing attendance back to unknown after a grant.
///
/// Expected: grant removed
#[tokio::test]
async fn unknown_attendance_revokes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 25).await?;
    let service = LedgerService::new(db);

    service.set_attendance(event.id, member.id, Some(true)).await?;
    service.set_attendance(event.id, member.id, None).await?;

    assert_eq!(service.balance(member.id).await?, 0);

    Ok(())
}

/// Tests marking absent when no grant exists.
///
/// Expected: Ok(None), no entries
#[tokio::test]
async fn absent_without_grant_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let service = LedgerService::new(db);

    let entry = service.set_attendance(event.id, member.id, Some(false)).await?;

    assert!(entry.is_none());
    assert!(service.entries(member.id).await?.is_empty());

    Ok(())
}

/// Tests attendance for a member who never signed up.
///
/// Expected: Err(AppError::NotFound) and no grant
#[tokio::test]
async fn missing_participation_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let service = LedgerService::new(db);

    let result = service.set_attendance(event.id, member.id, Some(true)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.balance(member.id).await?, 0);

    Ok(())
}

/// Tests attendance for an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;

    let result = LedgerService::new(db)
        .set_attendance(9999, member.id, Some(true))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a member holding both a signup and a waitlist row.
///
/// Expected: one grant only, and it stays while either row is attended
#[tokio::test]
async fn multiple_rows_share_one_grant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, signup) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let waitlist = factory::participation::ParticipationFactory::new(db, event.id, member.id)
        .kind("waitlist")
        .build()
        .await?;
    let service = LedgerService::new(db);

    service
        .set_participation_attendance(signup.id, Some(true))
        .await?;
    service
        .set_participation_attendance(waitlist.id, Some(true))
        .await?;

    assert_eq!(service.balance(member.id).await?, 10);
    assert_eq!(service.entries(member.id).await?.len(), 1);

    Ok(())
}

/// Tests that a grant keeps the point value it was created with.
///
/// Expected: changing the event type afterwards leaves the grant at 10, while a new
/// grant for another member uses the new value
#[tokio::test]
async fn grant_amount_is_fixed_at_grant_time() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first, event_type, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let second = factory::create_member(db).await?;
    factory::create_participation(db, event.id, second.id).await?;
    let service = LedgerService::new(db);

    service.set_attendance(event.id, first.id, Some(true)).await?;

    let mut active = event_type.into_active_model();
    active.dkp = ActiveValue::Set(30);
    active.update(db).await?;

    service.set_attendance(event.id, second.id, Some(true)).await?;

    assert_eq!(service.balance(first.id).await?, 10);
    assert_eq!(service.balance(second.id).await?, 30);

    Ok(())
}

/// Tests marking the waitlist row absent while the signup row is attended.
///
/// Expected: the signup row keeps its attendance and the grant stays
#[tokio::test]
async fn participation_update_leaves_sibling_row() -> Result<(), AppError> {
    use crate::server::data::participation::ParticipationRepository;

    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, signup) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let waitlist = factory::participation::ParticipationFactory::new(db, event.id, member.id)
        .kind("waitlist")
        .build()
        .await?;
    let service = LedgerService::new(db);

    service
        .set_participation_attendance(signup.id, Some(true))
        .await?;
    let entry = service
        .set_participation_attendance(waitlist.id, Some(false))
        .await?;

    assert_eq!(entry.map(|e| e.amount), Some(10));

    let repo = ParticipationRepository::new(db);
    assert_eq!(repo.find_by_id(signup.id).await?.unwrap().attended, Some(true));
    assert_eq!(repo.find_by_id(waitlist.id).await?.unwrap().attended, Some(false));
    assert_eq!(service.balance(member.id).await?, 10);

    service
        .set_participation_attendance(signup.id, Some(false))
        .await?;
    assert_eq!(service.balance(member.id).await?, 0);

    Ok(())
}
