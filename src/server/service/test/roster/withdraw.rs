use super::*;

/// Tests withdrawing an attended participation.
///
/// Expected: the attendance grant is removed with the row
#[tokio::test]
async fn withdrawing_attended_row_revokes_grant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let ledger = LedgerService::new(db);
    ledger.set_attendance(event.id, member.id, Some(true)).await?;

    RosterService::new(db)
        .withdraw(event.id, member.id, ParticipationKind::Signup)
        .await?;

    assert_eq!(ledger.balance(member.id).await?, 0);

    Ok(())
}

/// Tests withdrawing one of two attended rows.
///
/// Expected: the grant stays while the other row is attended
#[tokio::test]
async fn grant_survives_while_another_row_is_attended() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    factory::participation::ParticipationFactory::new(db, event.id, member.id)
        .kind("waitlist")
        .build()
        .await?;
    let ledger = LedgerService::new(db);
    ledger.set_attendance(event.id, member.id, Some(true)).await?;

    RosterService::new(db)
        .withdraw(event.id, member.id, ParticipationKind::Waitlist)
        .await?;

    assert_eq!(ledger.balance(member.id).await?, 10);

    Ok(())
}

/// Tests withdrawing a participation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_participation_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;

    let result = RosterService::new(db)
        .withdraw(event.id, member.id, ParticipationKind::Waitlist)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
