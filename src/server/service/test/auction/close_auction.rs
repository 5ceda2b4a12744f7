use super::*;

/// Tests closing an item nobody bid on.
///
/// Expected: unsold order with no winner, item closed and inactive
#[tokio::test]
async fn closes_unsold_without_bids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let item = factory::create_auction_item(db).await?;
    let service = AuctionService::new(db);

    let outcome = service.close_auction(item.id).await?;

    assert_eq!(outcome.order.status, OrderStatus::Unsold);
    assert_eq!(outcome.order.winner_id, None);
    assert_eq!(outcome.order.final_price, 0);

    let detail = service.get_item(item.id).await?;
    assert_eq!(detail.item.status, AuctionStatus::Closed);
    assert!(!detail.item.is_active);
    assert_eq!(detail.order, Some(outcome.order));

    Ok(())
}

/// Tests closing an item whose highest bid is below the reserve.
///
/// Expected: unsold order and the bidder is not debited
#[tokio::test]
async fn unmet_reserve_does_not_debit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::helpers::create_funded_member(db, 300).await?;
    let item = factory::create_auction_item(db).await?;
    factory::create_bid(db, item.id, member.id, 80, true).await?;

    let outcome = AuctionService::new(db).close_auction(item.id).await?;

    assert_eq!(outcome.order.status, OrderStatus::Unsold);
    assert_eq!(outcome.order.winner_id, None);
    assert_eq!(LedgerService::new(db).balance(member.id).await?, 300);

    Ok(())
}

/// Tests closing the same item twice.
///
/// Expected: second call reports the same order with already_closed, one debit only
#[tokio::test]
async fn second_close_reports_existing_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::helpers::create_funded_member(db, 300).await?;
    let item = factory::create_auction_item(db).await?;
    let service = AuctionService::new(db);

    service.place_bid(item.id, member.id, 120).await?;
    let first = service.close_auction(item.id).await?;
    let second = service.close_auction(item.id).await?;

    assert!(!first.already_closed);
    assert!(second.already_closed);
    assert_eq!(first.order, second.order);

    let ledger = LedgerService::new(db);
    assert_eq!(ledger.balance(member.id).await?, 180);
    assert_eq!(ledger.entries(member.id).await?.len(), 2);

    Ok(())
}

/// Tests closing an item that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_item_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuctionService::new(db).close_auction(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous closes of one item on a shared pool.
///
/// Expected: one call settles, the other reports the same order, one debit only
#[tokio::test]
async fn concurrent_closes_settle_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .on_disk()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::helpers::create_funded_member(db, 300).await?;
    let item = factory::create_auction_item(db).await?;
    let service = AuctionService::new(db);

    service.place_bid(item.id, member.id, 120).await?;

    let (first, second) = tokio::join!(
        service.close_auction(item.id),
        service.close_auction(item.id)
    );
    let (first, second) = (first?, second?);

    assert_eq!(first.order, second.order);
    assert_eq!(
        [first.already_closed, second.already_closed]
            .iter()
            .filter(|closed| !**closed)
            .count(),
        1
    );
    assert_eq!(first.order.status, OrderStatus::Settled);

    let ledger = LedgerService::new(db);
    assert_eq!(ledger.balance(member.id).await?, 180);
    assert_eq!(ledger.entries(member.id).await?.len(), 2);

    Ok(())
}
