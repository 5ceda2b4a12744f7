use super::*;

/// Tests admin member successfully passes admin permission check.
///
/// Expected: Ok(Member) with role admin
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::member::create_admin(db).await?;
    AuthSession::new(session).set_member_id(admin.id).await?;

    let member = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(member.id, admin.id);
    assert_eq!(member.role, MemberRole::Admin);

    Ok(())
}

/// Tests regular member is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the member id
#[tokio::test]
async fn denies_access_to_regular_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::create_member(db).await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(member_id, _))) => {
            assert_eq!(member_id, member.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|m| m.id)),
    }

    Ok(())
}
