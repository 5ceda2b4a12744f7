use super::*;

/// Tests that signing up twice for the same kind updates the existing row.
///
/// Expected: one row, role and class from the second call, attendance kept
#[tokio::test]
async fn updates_existing_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, participation) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let repo = ParticipationRepository::new(db);

    repo.set_attended(event.id, member.id, Some(true)).await?;
    let updated = repo
        .upsert(SignUpParam {
            event_id: event.id,
            member_id: member.id,
            kind: ParticipationKind::Signup,
            role: Some(CombatRole::Heal),
            class: Some("Cleric".to_string()),
        })
        .await?;

    assert_eq!(updated.id, participation.id);
    assert_eq!(updated.role, Some(CombatRole::Heal));
    assert_eq!(updated.attended, Some(true));
    assert_eq!(repo.get_participants(event.id, None).await?.len(), 1);

    Ok(())
}

/// Tests that a waitlist entry is a separate row from a signup.
///
/// Expected: two rows for the same (member, event)
#[tokio::test]
async fn waitlist_is_separate_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let repo = ParticipationRepository::new(db);

    repo.upsert(SignUpParam {
        event_id: event.id,
        member_id: member.id,
        kind: ParticipationKind::Waitlist,
        role: None,
        class: None,
    })
    .await?;

    assert_eq!(repo.get_participants(event.id, None).await?.len(), 2);

    Ok(())
}

/// Tests deleting a participation by kind.
///
/// Expected: true on first delete, false on second
#[tokio::test]
async fn deletes_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let repo = ParticipationRepository::new(db);

    assert!(!repo.delete(event.id, member.id, ParticipationKind::Waitlist).await?);
    assert!(repo.delete(event.id, member.id, ParticipationKind::Signup).await?);
    assert!(!repo.delete(event.id, member.id, ParticipationKind::Signup).await?);

    Ok(())
}
