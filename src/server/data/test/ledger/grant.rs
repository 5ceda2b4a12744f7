use super::*;

/// Tests that a second attendance grant for the same pair is ignored.
///
/// Expected: first call inserts, second does not, one entry with the original amount
#[tokio::test]
async fn grant_is_insert_or_ignore() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let repo = LedgerRepository::new(db);

    assert!(repo.grant_attendance(member.id, event.id, 10).await?);
    assert!(!repo.grant_attendance(member.id, event.id, 99).await?);

    let entry = repo.find_attendance(member.id, event.id).await?.unwrap();
    assert_eq!(entry.amount, 10);
    assert_eq!(repo.get_by_member(member.id).await?.len(), 1);

    Ok(())
}

/// Tests revoking a grant and revoking again.
///
/// Expected: true then false, no entry left
#[tokio::test]
async fn revoke_is_noop_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let (_, event) = factory::helpers::create_event_with_type(db, 10).await?;
    let repo = LedgerRepository::new(db);

    repo.grant_attendance(member.id, event.id, 10).await?;

    assert!(repo.revoke_attendance(member.id, event.id).await?);
    assert!(!repo.revoke_attendance(member.id, event.id).await?);
    assert!(repo.find_attendance(member.id, event.id).await?.is_none());

    Ok(())
}

/// Tests that an order can only be debited once.
///
/// Expected: second debit for the same order fails on the unique grant key
#[tokio::test]
async fn rejects_second_debit_for_order() -> Result<(), AppError> {
    use crate::{model::auction::OrderStatus, server::data::auction::AuctionOrderRepository};
    use crate::server::model::auction::CreateOrderParam;

    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::create_member(db).await?;
    let item = factory::create_auction_item(db).await?;
    let order = AuctionOrderRepository::new(db)
        .create(CreateOrderParam {
            auction_item_id: item.id,
            final_price: 120,
            winner_id: Some(member.id),
            winning_bid_id: None,
            status: OrderStatus::Settled,
        })
        .await?;
    let repo = LedgerRepository::new(db);

    let debit = repo.debit_auction(member.id, order.id, 120).await?;

    assert_eq!(debit.amount, -120);
    assert!(repo.debit_auction(member.id, order.id, 120).await.is_err());

    Ok(())
}
