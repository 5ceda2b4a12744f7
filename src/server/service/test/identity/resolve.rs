use super::*;

/// Tests resolving the same identity twice.
///
/// Expected: one member, same id both times, role user
#[tokio::test]
async fn resolving_twice_yields_same_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = IdentityService::new(db);

    let first = service.resolve(assertion(1, vec![]), Some(ADMIN_ROLE)).await?;
    let second = service.resolve(assertion(1, vec![]), Some(ADMIN_ROLE)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.role, MemberRole::User);
    assert_eq!(second.preferred_combat_role, CombatRole::Dps);

    Ok(())
}

/// Tests that carrying the admin group upgrades the member.
///
/// Expected: role admin
#[tokio::test]
async fn admin_group_upgrades_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = IdentityService::new(db)
        .resolve(assertion(1, vec![1, ADMIN_ROLE]), Some(ADMIN_ROLE))
        .await?;

    assert_eq!(member.role, MemberRole::Admin);

    Ok(())
}

/// Tests that losing the admin group does not demote.
///
/// Expected: role stays admin
#[tokio::test]
async fn admin_is_not_demoted_on_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = IdentityService::new(db);

    service
        .resolve(assertion(1, vec![ADMIN_ROLE]), Some(ADMIN_ROLE))
        .await?;
    let member = service.resolve(assertion(1, vec![]), Some(ADMIN_ROLE)).await?;

    assert_eq!(member.role, MemberRole::Admin);

    Ok(())
}

/// Tests that no admin role configured means no promotion.
///
/// Expected: role user even with groups present
#[tokio::test]
async fn no_promotion_without_configured_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = IdentityService::new(db)
        .resolve(assertion(1, vec![ADMIN_ROLE]), None)
        .await?;

    assert_eq!(member.role, MemberRole::User);

    Ok(())
}
