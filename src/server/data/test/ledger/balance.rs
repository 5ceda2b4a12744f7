use super::*;

/// Tests balance of a member with no entries.
///
/// Expected: 0
#[tokio::test]
async fn balance_is_zero_without_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;

    assert_eq!(LedgerRepository::new(db).balance(member.id).await?, 0);

    Ok(())
}

/// Tests that balance sums grants across events and ignores other members.
///
/// Expected: 10 + 25 for the member, other member unaffected
#[tokio::test]
async fn balance_sums_member_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::helpers::create_funded_member(db, 10).await?;
    factory::helpers::fund_member(db, member.id, 25).await?;
    let other = factory::helpers::create_funded_member(db, 7).await?;
    let repo = LedgerRepository::new(db);

    assert_eq!(repo.balance(member.id).await?, 35);
    assert_eq!(repo.balance(other.id).await?, 7);
    assert_eq!(repo.get_all_amounts().await?.len(), 3);

    Ok(())
}
