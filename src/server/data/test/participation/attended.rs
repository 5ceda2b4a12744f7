use super::*;

/// Tests setting attendance on all rows of a (member, event) pair.
///
/// Expected: both signup and waitlist rows updated
#[tokio::test]
async fn sets_attended_on_every_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, _) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    factory::participation::ParticipationFactory::new(db, event.id, member.id)
        .kind("waitlist")
        .build()
        .await?;
    let repo = ParticipationRepository::new(db);

    let updated = repo.set_attended(event.id, member.id, Some(true)).await?;

    assert_eq!(updated, 2);
    assert!(repo.any_attended(event.id, member.id).await?);

    repo.set_attended(event.id, member.id, None).await?;
    assert!(!repo.any_attended(event.id, member.id).await?);

    Ok(())
}

/// Tests updating attendance for a pair with no participation.
///
/// Expected: zero rows updated
#[tokio::test]
async fn reports_zero_rows_without_participation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;

    let updated = ParticipationRepository::new(db)
        .set_attended(event.id, member.id, Some(true))
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests setting attendance on one row while the member holds another.
///
/// Expected: only the addressed row changes
#[tokio::test]
async fn sets_attended_on_addressed_row_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (member, _, event, signup) =
        factory::helpers::create_participation_with_dependencies(db, 10).await?;
    let waitlist = factory::participation::ParticipationFactory::new(db, event.id, member.id)
        .kind("waitlist")
        .attended(Some(true))
        .build()
        .await?;
    let repo = ParticipationRepository::new(db);

    assert_eq!(repo.set_attended_by_id(signup.id, Some(false)).await?, 1);

    let waitlist = repo.find_by_id(waitlist.id).await?.unwrap();
    assert_eq!(waitlist.attended, Some(true));
    let signup = repo.find_by_id(signup.id).await?.unwrap();
    assert_eq!(signup.attended, Some(false));

    assert_eq!(repo.set_attended_by_id(9999, Some(true)).await?, 0);

    Ok(())
}
