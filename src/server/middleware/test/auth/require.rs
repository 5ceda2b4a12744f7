use super::*;

mod require_admin;

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any logged in member with a
/// valid database record is granted access.
///
/// Expected: Ok(Member)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::create_member(db).await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, member.id);

    Ok(())
}

/// Tests a session without a logged in member.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session referring to a member that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_missing_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_member_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
