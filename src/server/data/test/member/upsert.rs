use super::*;

fn param(discord_id: u64, server_name: &str, promote_to_admin: bool) -> UpsertMemberParam {
    UpsertMemberParam {
        discord_id,
        global_name: "Global".to_string(),
        server_name: server_name.to_string(),
        promote_to_admin,
    }
}

/// Tests creating a member on first sight.
///
/// Expected: Ok with role user and combat role dps
#[tokio::test]
async fn creates_new_member_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberRepository::new(db)
        .upsert(param(123456789, "Tanky", false))
        .await?;

    assert_eq!(member.discord_id, 123456789);
    assert_eq!(member.server_name, "Tanky");
    assert_eq!(member.role, MemberRole::User);
    assert_eq!(member.preferred_combat_role, CombatRole::Dps);

    Ok(())
}

/// Tests that repeated upserts converge on one row and sync names.
///
/// Expected: same id on both calls, server name updated
#[tokio::test]
async fn upsert_is_idempotent_and_syncs_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = MemberRepository::new(db);

    let first = repo.upsert(param(42, "Old Nick", false)).await?;
    let second = repo.upsert(param(42, "New Nick", false)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.server_name, "New Nick");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that the admin group upgrades an existing member.
///
/// Expected: role becomes admin
#[tokio::test]
async fn promotes_existing_member_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = MemberRepository::new(db);

    repo.upsert(param(42, "Nick", false)).await?;
    let promoted = repo.upsert(param(42, "Nick", true)).await?;

    assert_eq!(promoted.role, MemberRole::Admin);

    Ok(())
}

/// Tests that logging in without the admin group does not demote.
///
/// Expected: role stays admin
#[tokio::test]
async fn preserves_admin_role_without_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .discord_id("42")
        .role("admin")
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .upsert(param(42, "Nick", false))
        .await?;

    assert_eq!(member.role, MemberRole::Admin);

    Ok(())
}

/// Tests that the combat role chosen by the member survives a login.
///
/// Expected: preferred combat role unchanged by upsert
#[tokio::test]
async fn preserves_profile_on_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .discord_id("42")
        .preferred_combat_role("heal")
        .build()
        .await?;

    let member = MemberRepository::new(db)
        .upsert(param(42, "Nick", false))
        .await?;

    assert_eq!(member.preferred_combat_role, CombatRole::Heal);

    Ok(())
}
