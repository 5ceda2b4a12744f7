use super::*;

/// Tests leaderboard ordering.
///
/// Expected: highest balance first, members without entries listed with 0
#[tokio::test]
async fn orders_by_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let poor = factory::create_member(db).await?;
    let rich = factory::helpers::create_funded_member(db, 50).await?;
    let middle = factory::helpers::create_funded_member(db, 20).await?;

    let board = LedgerService::new(db).leaderboard().await?;

    let ids: Vec<i32> = board.iter().map(|entry| entry.member_id).collect();
    assert_eq!(ids, vec![rich.id, middle.id, poor.id]);
    assert_eq!(board[0].balance, 50);
    assert_eq!(board[2].balance, 0);

    Ok(())
}
