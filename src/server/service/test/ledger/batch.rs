use super::*;

/// Tests a batch where the second update references a missing participation.
///
/// Expected: first update committed, second reported, success false
#[tokio::test]
async fn partial_failure_keeps_committed_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, _, participation) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let service = LedgerService::new(db);

    let result = service
        .apply_attendance_batch(vec![
            AttendanceUpdate {
                participation_id: participation.id,
                attended: Some(true),
            },
            AttendanceUpdate {
                participation_id: 9999,
                attended: Some(true),
            },
        ])
        .await;

    assert!(!result.success());
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].participation_id, participation.id);
    assert!(result.outcomes[0].error.is_none());
    assert_eq!(result.outcomes[1].participation_id, 9999);
    assert!(result.outcomes[1].error.is_some());
    assert_eq!(service.balance(member.id).await?, 10);

    Ok(())
}

/// Tests a batch covering several members of one event.
///
/// Expected: success true, each attended member granted
#[tokio::test]
async fn batch_grants_each_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first, _, event, first_row) =
        factory::helpers::create_participation_with_dependencies(db, 15).await?;
    let second = factory::create_member(db).await?;
    let second_row = factory::create_participation(db, event.id, second.id).await?;
    let service = LedgerService::new(db);

    let result = service
        .apply_attendance_batch(vec![
            AttendanceUpdate {
                participation_id: first_row.id,
                attended: Some(true),
            },
            AttendanceUpdate {
                participation_id: second_row.id,
                attended: Some(false),
            },
        ])
        .await;

    assert!(result.success());
    assert_eq!(service.balance(first.id).await?, 15);
    assert_eq!(service.balance(second.id).await?, 0);

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: success true with no outcomes
#[tokio::test]
async fn empty_batch_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LedgerService::new(db).apply_attendance_batch(vec![]).await;

    assert!(result.success());
    assert!(result.outcomes.is_empty());

    Ok(())
}
